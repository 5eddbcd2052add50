//! PlayerBrain - per-player online-trained controller
//!
//! 선수마다 작은 feedforward 예측기를 두고, 매 틱 역할에 맞는 목표 출력 쪽으로
//! 한 번씩 학습시킨다. 예측기가 퇴화하면 컨트롤러 전체를 새것으로 교체.
//!
//! ## 구성 요소
//!
//! - `Predictor` / `PredictorFactory`: 예측기 capability (기본 구현 `FeedForwardNet`)
//! - `Featurizer`: 매치 상태 → 입력 벡터 (기본 구현 `FieldFeaturizer`)
//! - `TargetSynthesizer`: 역할별 목표 출력
//! - `classify`: 출력 → 이산 액션
//! - `validity_report` / `is_valid`: 예측기 상태 검사
//! - `BrainTrainer::update_controller`: 위 요소를 묶은 틱 업데이트
//! - `BrainObserver`: 진단 side channel
//!
//! ## 사용 예시
//!
//! ```rust
//! use of_brain::brain::BrainTrainer;
//! use of_brain::config::BrainConfig;
//! use of_brain::models::{BallState, Player, Position, Role, Team, TeamContext};
//!
//! let config = BrainConfig::default();
//! let context = TeamContext::for_team(Team::Red, &config.field);
//! let mut trainer = BrainTrainer::new(config);
//!
//! let player = Player::new(9, Team::Red, Role::Forward, Position::new(500.0, 300.0));
//! let ball = BallState::new(Position::new(600.0, 300.0), Position::new(-5.0, 0.0));
//!
//! let controller = trainer.create_controller();
//! let controller = trainer.update_controller(controller, false, &ball, &player, &context);
//! let decision = controller.decision();
//! assert!(decision.movement.x.abs() <= 1.0);
//! ```

pub mod classifier;
pub mod controller;
pub mod features;
pub mod guard;
pub mod network;
pub mod observer;
pub mod output;
pub mod predictor;
pub mod synthesis;
pub mod trainer;

pub use classifier::{classify, package, BrainDecision};
pub use controller::Controller;
pub use features::{Featurizer, FieldFeaturizer, InputFeatures, INPUT_SIZE};
pub use guard::{is_valid, validity_report};
pub use network::{Activation, FeedForwardFactory, FeedForwardNet};
pub use observer::{
    BrainEvent, BrainObserver, NoopObserver, RecordingObserver, ResetReason, TracingObserver,
    TrainingTrace,
};
pub use output::{OutputChannels, OUTPUT_SIZE};
pub use predictor::{LayerShape, Predictor, PredictorFactory, TrainOptions, TrainingReport, TrainingSample};
pub use synthesis::{GoalkeeperReading, TargetSynthesizer};
pub use trainer::BrainTrainer;

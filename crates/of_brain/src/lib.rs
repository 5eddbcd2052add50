//! # of_brain - Per-Player Online-Trained Behavior Controllers
//!
//! 시뮬레이션 선수 한 명의 행동 컨트롤러(작은 feedforward 예측기)를
//! 매 틱 매치 상태에 맞춰 역할별 목표 행동 쪽으로 학습시키고,
//! 내부 수치 상태가 퇴화하면 컨트롤러를 새것으로 교체한다.
//!
//! ## Features
//! - 역할별(FW/MF/DF/GK) 목표 행동 합성
//! - 반복 상한이 고정된 틱당 학습 1패스
//! - 학습 전/후 validity guard + 자동 교체
//! - 고정 시드 초기화 (같은 seed = 같은 네트워크)
//!
//! 렌더링, 물리, 매치 진행은 범위 밖. 호출자가 공/선수/팀 컨텍스트를 넘기고
//! 이동 벡터와 액션 라벨을 받아간다.

// Constructors and tick APIs take many match-state parameters
#![allow(clippy::too_many_arguments)]

pub mod brain;
pub mod config;
pub mod error;
pub mod models;
pub mod squad;

pub use brain::{
    classify, is_valid, BrainDecision, BrainTrainer, Controller, FeedForwardNet, OutputChannels,
    Predictor, PredictorFactory,
};
pub use config::BrainConfig;
pub use error::{BrainError, Result};
pub use models::{Action, BallState, Player, Position, Role, Team, TeamContext};
pub use squad::SquadBrains;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

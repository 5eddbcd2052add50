//! Predictor capability
//!
//! 컨트롤러가 소유하는 학습 가능한 예측기의 공통 인터페이스.
//! 코어는 이 트레이트만 의존하고, 학습 알고리즘 자체는 구현체에 맡긴다.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// 한 번의 학습 패스 옵션
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainOptions {
    /// 반복 상한 - 틱당 작업량의 유일한 상한
    pub iterations: usize,
    /// 평균 제곱 오차가 이보다 작으면 조기 종료
    pub error_thresh: f32,
    pub learning_rate: f32,
    pub momentum: f32,
    /// 0이면 학습 중 로그 없음
    pub log_period: usize,
}

/// 학습 결과 요약
///
/// `error < error_thresh` 이거나 `iterations == cap` 중 하나는 항상 성립.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingReport {
    pub iterations: usize,
    pub error: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSample {
    pub input: Vec<f32>,
    pub output: Vec<f32>,
}

/// 레이어 하나의 (입력 폭, 출력 폭)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerShape {
    pub inputs: usize,
    pub outputs: usize,
}

pub trait Predictor {
    /// 순전파. 값의 유한성은 검사하지 않음 (validity guard 담당)
    fn run(&self, input: &[f32]) -> Result<Vec<f32>>;

    /// `samples` 전체를 하나의 배치로 최대 `options.iterations` 회 학습
    fn train(&mut self, samples: &[TrainingSample], options: &TrainOptions)
        -> Result<TrainingReport>;

    /// 내부 레이어 구조 조회. 가중치가 없으면 `Err`
    fn layer_shapes(&self) -> Result<Vec<LayerShape>>;

    /// NaN/Inf 가중치를 가진 첫 레이어 인덱스
    fn first_non_finite_layer(&self) -> Option<usize>;

    fn parameters_finite(&self) -> bool {
        self.first_non_finite_layer().is_none()
    }
}

/// 새(미학습) 예측기를 만드는 팩토리
pub trait PredictorFactory {
    type Output: Predictor;

    fn create(&mut self) -> Self::Output;
}

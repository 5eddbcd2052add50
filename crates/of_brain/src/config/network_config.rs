//! Feedforward network layout

use serde::{Deserialize, Serialize};

use crate::brain::network::Activation;

/// 컨트롤러 네트워크 구성
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// 은닉층 크기 (기본: [16, 12, 8])
    pub hidden_layers: Vec<usize>,
    pub hidden_activation: Activation,
    /// tanh면 이동 채널이 음수를 낼 수 있음
    pub output_activation: Activation,
    /// 가중치 초기화 RNG 시드
    pub seed: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            hidden_layers: vec![16, 12, 8],
            hidden_activation: Activation::Sigmoid,
            output_activation: Activation::Tanh,
            seed: 42,
        }
    }
}

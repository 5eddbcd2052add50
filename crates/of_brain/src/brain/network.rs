//! FeedForwardNet - dense multilayer perceptron
//!
//! 기본 예측기 구현. 레이어마다 (출력 x 입력) 가중치 행렬과 바이어스 벡터를 가지며,
//! 단일 샘플 경사하강 + 모멘텀으로 평균 제곱 오차를 줄인다.
//!
//! 가중치가 하나도 없는 `untrained()` 네트워크는 항상 invalid 판정을 받는다.

use nalgebra::{DMatrix, DVector};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Uniform};
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::features::INPUT_SIZE;
use super::output::OUTPUT_SIZE;
use super::predictor::{LayerShape, Predictor, PredictorFactory, TrainOptions, TrainingReport, TrainingSample};
use crate::config::NetworkConfig;
use crate::error::{BrainError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    Sigmoid,
    Tanh,
}

impl Activation {
    fn apply(self, x: f32) -> f32 {
        match self {
            Activation::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            Activation::Tanh => x.tanh(),
        }
    }

    /// 활성화 출력값 `y`에서 계산한 도함수
    fn derivative(self, y: f32) -> f32 {
        match self {
            Activation::Sigmoid => y * (1.0 - y),
            Activation::Tanh => 1.0 - y * y,
        }
    }

    /// 출력 범위 (min, max)
    pub fn range(self) -> (f32, f32) {
        match self {
            Activation::Sigmoid => (0.0, 1.0),
            Activation::Tanh => (-1.0, 1.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DenseLayer {
    pub(crate) weights: DMatrix<f32>,
    pub(crate) biases: DVector<f32>,
    activation: Activation,
    weight_velocity: DMatrix<f32>,
    bias_velocity: DVector<f32>,
}

impl DenseLayer {
    fn random<R: Rng>(inputs: usize, outputs: usize, activation: Activation, rng: &mut R) -> Self {
        // Xavier uniform
        let limit = (6.0 / (inputs + outputs).max(1) as f32).sqrt();
        let weight_dist = Uniform::new_inclusive(-limit, limit);
        let bias_dist = Uniform::new_inclusive(-0.2f32, 0.2f32);

        let weights = DMatrix::from_fn(outputs, inputs, |_, _| weight_dist.sample(&mut *rng));
        let biases = DVector::from_fn(outputs, |_, _| bias_dist.sample(&mut *rng));

        Self {
            weights,
            biases,
            activation,
            weight_velocity: DMatrix::zeros(outputs, inputs),
            bias_velocity: DVector::zeros(outputs),
        }
    }

    fn forward(&self, input: &DVector<f32>) -> DVector<f32> {
        let activation = self.activation;
        (&self.weights * input + &self.biases).map(|z| activation.apply(z))
    }

    fn shape(&self) -> LayerShape {
        LayerShape { inputs: self.weights.ncols(), outputs: self.weights.nrows() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedForwardNet {
    pub(crate) layers: Vec<DenseLayer>,
}

impl FeedForwardNet {
    pub fn new<R: Rng>(
        input_size: usize,
        hidden_layers: &[usize],
        output_size: usize,
        hidden_activation: Activation,
        output_activation: Activation,
        rng: &mut R,
    ) -> Self {
        let mut widths = Vec::with_capacity(hidden_layers.len() + 2);
        widths.push(input_size);
        widths.extend_from_slice(hidden_layers);
        widths.push(output_size);

        let last = widths.len() - 2;
        let layers = widths
            .windows(2)
            .enumerate()
            .map(|(i, pair)| {
                let activation = if i == last { output_activation } else { hidden_activation };
                DenseLayer::random(pair[0], pair[1], activation, &mut *rng)
            })
            .collect();

        Self { layers }
    }

    /// 가중치가 없는 네트워크
    pub fn untrained() -> Self {
        Self { layers: Vec::new() }
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn parameter_count(&self) -> usize {
        self.layers.iter().map(|l| l.weights.len() + l.biases.len()).sum()
    }

    pub fn output_activation(&self) -> Option<Activation> {
        self.layers.last().map(|l| l.activation)
    }

    fn check_input(&self, input: &[f32]) -> Result<()> {
        let first = self.layers.first().ok_or(BrainError::Untrained)?;
        if first.weights.ncols() != input.len() {
            return Err(BrainError::ShapeMismatch {
                context: "input",
                expected: first.weights.ncols(),
                found: input.len(),
            });
        }
        Ok(())
    }

    /// 입력 포함 모든 레이어의 활성값
    fn forward_all(&self, input: &[f32]) -> Vec<DVector<f32>> {
        let mut activations = Vec::with_capacity(self.layers.len() + 1);
        let mut current = DVector::from_column_slice(input);
        for layer in &self.layers {
            let next = layer.forward(&current);
            activations.push(current);
            current = next;
        }
        activations.push(current);
        activations
    }

    /// 샘플 하나에 대한 역전파 1회. 갱신 전 순전파 기준 MSE 반환
    fn train_sample(&mut self, input: &[f32], target: &[f32], learning_rate: f32, momentum: f32) -> f32 {
        let activations = self.forward_all(input);
        let n = self.layers.len();
        let output = &activations[n];

        let error = DVector::from_column_slice(target) - output;
        let mse = error.norm_squared() / error.len().max(1) as f32;

        let out_activation = self.layers[n - 1].activation;
        let mut delta = error.component_mul(&output.map(|y| out_activation.derivative(y)));

        for idx in (0..n).rev() {
            let prev = &activations[idx];

            // 가중치 갱신 전에 다음 delta를 먼저 계산
            let next_delta = if idx > 0 {
                let activation = self.layers[idx - 1].activation;
                let back = self.layers[idx].weights.transpose() * &delta;
                Some(back.component_mul(&prev.map(|a| activation.derivative(a))))
            } else {
                None
            };

            let layer = &mut self.layers[idx];
            let grad = &delta * prev.transpose();
            layer.weight_velocity = grad * learning_rate + &layer.weight_velocity * momentum;
            layer.weights += &layer.weight_velocity;
            layer.bias_velocity = &delta * learning_rate + &layer.bias_velocity * momentum;
            layer.biases += &layer.bias_velocity;

            if let Some(d) = next_delta {
                delta = d;
            }
        }

        mse
    }
}

impl Predictor for FeedForwardNet {
    fn run(&self, input: &[f32]) -> Result<Vec<f32>> {
        self.check_input(input)?;
        let activations = self.forward_all(input);
        Ok(activations[self.layers.len()].iter().copied().collect())
    }

    fn train(&mut self, samples: &[TrainingSample], options: &TrainOptions) -> Result<TrainingReport> {
        if samples.is_empty() {
            return Err(BrainError::EmptyBatch);
        }
        for sample in samples {
            self.check_input(&sample.input)?;
            let outputs = self.layers[self.layers.len() - 1].weights.nrows();
            if sample.output.len() != outputs {
                return Err(BrainError::ShapeMismatch {
                    context: "target",
                    expected: outputs,
                    found: sample.output.len(),
                });
            }
        }

        let mut error = f32::INFINITY;
        for iteration in 0..options.iterations {
            let total: f32 = samples
                .iter()
                .map(|s| self.train_sample(&s.input, &s.output, options.learning_rate, options.momentum))
                .sum();
            error = total / samples.len() as f32;

            if options.log_period > 0 && (iteration + 1) % options.log_period == 0 {
                trace!(iteration = iteration + 1, error, "training");
            }

            if error < options.error_thresh || !error.is_finite() {
                return Ok(TrainingReport { iterations: iteration + 1, error });
            }
        }

        Ok(TrainingReport { iterations: options.iterations, error })
    }

    fn layer_shapes(&self) -> Result<Vec<LayerShape>> {
        if self.layers.is_empty() {
            return Err(BrainError::Untrained);
        }
        self.layers
            .iter()
            .map(|layer| {
                let shape = layer.shape();
                if layer.biases.len() != shape.outputs {
                    return Err(BrainError::ShapeMismatch {
                        context: "bias",
                        expected: shape.outputs,
                        found: layer.biases.len(),
                    });
                }
                Ok(shape)
            })
            .collect()
    }

    fn first_non_finite_layer(&self) -> Option<usize> {
        self.layers
            .iter()
            .position(|l| l.weights.iter().chain(l.biases.iter()).any(|v| !v.is_finite()))
    }
}

/// 시드 고정 팩토리 - 같은 시드면 같은 순서로 같은 네트워크 생성
#[derive(Debug, Clone)]
pub struct FeedForwardFactory {
    network: NetworkConfig,
    rng: ChaCha8Rng,
}

impl FeedForwardFactory {
    pub fn new(network: NetworkConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(network.seed);
        Self { network, rng }
    }
}

impl Default for FeedForwardFactory {
    fn default() -> Self {
        Self::new(NetworkConfig::default())
    }
}

impl PredictorFactory for FeedForwardFactory {
    type Output = FeedForwardNet;

    fn create(&mut self) -> FeedForwardNet {
        FeedForwardNet::new(
            INPUT_SIZE,
            &self.network.hidden_layers,
            OUTPUT_SIZE,
            self.network.hidden_activation,
            self.network.output_activation,
            &mut self.rng,
        )
    }
}

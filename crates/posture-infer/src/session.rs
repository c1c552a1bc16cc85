use crate::InferError;
use posture_base::Tensor;
use std::collections::HashMap;

/// A loaded model. Inputs and outputs are addressed by name.
pub trait Session {
    fn run(
        &mut self,
        inputs: &[(&str, Tensor<f32>)],
    ) -> Result<HashMap<String, Tensor<f32>>, InferError>;
    fn input_names(&self) -> &[String];
    fn output_names(&self) -> &[String];
}

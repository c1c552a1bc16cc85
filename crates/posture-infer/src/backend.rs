use crate::{InferError, ModelSource, Session};

/// An inference engine able to turn a model into a runnable [`Session`].
pub trait Backend {
    fn name(&self) -> &str;
    fn load_model(&self, model: ModelSource) -> Result<Box<dyn Session>, InferError>;
}

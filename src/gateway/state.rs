use std::sync::Arc;

use crate::compare::FaceComparator;
use crate::fetch::ResourceFetcher;
use crate::pipeline::VerificationPipeline;

/// Shared, read-only per-process state handed to every handler.
#[derive(Clone)]
pub struct HandlerState<
    F: ResourceFetcher + Clone + Send + Sync + 'static,
    C: FaceComparator + Clone + Send + Sync + 'static,
> {
    pub pipeline: Arc<VerificationPipeline<F, C>>,

    pub api_secret: String,

    pub model_name: String,
}

impl<F, C> HandlerState<F, C>
where
    F: ResourceFetcher + Clone + Send + Sync + 'static,
    C: FaceComparator + Clone + Send + Sync + 'static,
{
    pub fn new(
        pipeline: Arc<VerificationPipeline<F, C>>,
        api_secret: String,
        model_name: String,
    ) -> Self {
        Self {
            pipeline,
            api_secret,
            model_name,
        }
    }
}

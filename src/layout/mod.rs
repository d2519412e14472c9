pub(crate) mod breaker;
pub(crate) mod cache;
pub(crate) mod pipeline;
pub(crate) mod placement;
pub(crate) mod words;

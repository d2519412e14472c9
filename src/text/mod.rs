pub(crate) mod measure;
#[cfg(feature = "parley")]
pub(crate) mod parley_measurer;
pub(crate) mod script;

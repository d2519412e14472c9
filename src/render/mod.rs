pub(crate) mod emphasis;
pub(crate) mod frame;
pub(crate) mod gradient;

pub(crate) mod circle;
pub(crate) mod line;
pub(crate) mod model;
pub(crate) mod rect;

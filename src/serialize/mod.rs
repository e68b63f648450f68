pub(crate) mod fingerprint;
pub(crate) mod save;
pub(crate) mod writer;

pub(crate) mod fvp;

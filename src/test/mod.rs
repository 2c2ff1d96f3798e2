pub(crate) mod multilinestring;

pub(crate) mod comparator;

//! Marker types.

/// Marker type describing an arrival (the first night of a stay).
#[derive(Clone, Copy, Debug)]
pub struct CheckIn;

/// Marker type describing a departure (the morning after the last night).
#[derive(Clone, Copy, Debug)]
pub struct CheckOut;

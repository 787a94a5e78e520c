//! I/O utilities for buffer handling
//!
//! This module provides the bounds-checked cursor and the byte order
//! strategies used by the parser.

pub mod cursor;
pub mod byte_order;

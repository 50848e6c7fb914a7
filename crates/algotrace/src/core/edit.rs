//! Node insertion and deletion on flat structures
//!
//! Both operations return a new sequence and leave their input untouched.

use super::{Result, TraceError};

/// Insert `value` before `index`; `index == len` appends
pub fn insert_node<T: Clone>(data: &[T], index: usize, value: T) -> Result<Vec<T>> {
    if index > data.len() {
        return Err(TraceError::IndexOutOfRange {
            index,
            len: data.len(),
        });
    }
    let mut edited = Vec::with_capacity(data.len() + 1);
    edited.extend_from_slice(&data[..index]);
    edited.push(value);
    edited.extend_from_slice(&data[index..]);
    Ok(edited)
}

/// Remove the element at `index`
pub fn delete_node<T: Clone>(data: &[T], index: usize) -> Result<Vec<T>> {
    if index >= data.len() {
        return Err(TraceError::IndexOutOfRange {
            index,
            len: data.len(),
        });
    }
    let mut edited = data.to_vec();
    edited.remove(index);
    Ok(edited)
}

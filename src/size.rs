use std::{rc::Rc, sync::Arc};

/// Number of bytes a key or value contributes to the list's memory usage.
///
/// Fixed-size primitives report their in-memory width; buffer-backed types
/// report their byte length; tuples and options sum or forward their parts.
pub trait ByteSize {
    /// Bytes accounted for this value.
    fn byte_size(&self) -> usize;
}

macro_rules! impl_byte_size_prim {
    ($($t:ty),* $(,)?) => {
        $(
            impl ByteSize for $t {
                #[inline]
                fn byte_size(&self) -> usize {
                    std::mem::size_of::<$t>()
                }
            }
        )*
    };
}

impl_byte_size_prim!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char, ()
);

macro_rules! impl_byte_size_buf {
    ($($t:ty),* $(,)?) => {
        $(
            impl ByteSize for $t {
                #[inline]
                fn byte_size(&self) -> usize {
                    self.len()
                }
            }
        )*
    };
}

impl_byte_size_buf!(
    str,
    String,
    [u8],
    Vec<u8>,
    Box<str>,
    Box<[u8]>,
    Arc<str>,
    Arc<[u8]>,
    Rc<str>,
    Rc<[u8]>
);

#[cfg(feature = "type_bytes")]
impl_byte_size_buf!(bytes::Bytes);

impl<T: ByteSize + ?Sized> ByteSize for &T {
    #[inline]
    fn byte_size(&self) -> usize {
        (**self).byte_size()
    }
}

impl<T: ByteSize> ByteSize for Option<T> {
    fn byte_size(&self) -> usize {
        self.as_ref().map(ByteSize::byte_size).unwrap_or_default()
    }
}

impl<const N: usize> ByteSize for [u8; N] {
    #[inline]
    fn byte_size(&self) -> usize {
        N
    }
}

impl<A: ByteSize, B: ByteSize> ByteSize for (A, B) {
    fn byte_size(&self) -> usize {
        self.0.byte_size() + self.1.byte_size()
    }
}

impl<A: ByteSize, B: ByteSize, C: ByteSize> ByteSize for (A, B, C) {
    fn byte_size(&self) -> usize {
        self.0.byte_size() + self.1.byte_size() + self.2.byte_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_report_width() {
        assert_eq!(1u64.byte_size(), 8);
        assert_eq!(1u8.byte_size(), 1);
        assert_eq!(true.byte_size(), 1);
        assert_eq!(().byte_size(), 0);
    }

    #[test]
    fn buffers_report_length() {
        assert_eq!("hello".to_string().byte_size(), 5);
        assert_eq!(vec![0u8; 3].byte_size(), 3);
        assert_eq!(Arc::<str>::from("abcd").byte_size(), 4);
        assert_eq!([0u8; 16].byte_size(), 16);
        assert_eq!(Some("ab".to_string()).byte_size(), 2);
        assert_eq!(None::<String>.byte_size(), 0);
    }

    #[test]
    fn tuples_sum_parts() {
        assert_eq!((1u32, "abc".to_string()).byte_size(), 7);
        assert_eq!((1u8, 2u16, vec![1u8, 2]).byte_size(), 5);
    }
}

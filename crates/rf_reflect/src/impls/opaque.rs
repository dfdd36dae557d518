//! Types that are legal field types but are never read or written.

use alloc::collections::BTreeSet;
use std::collections::HashSet;

use crate::impls::utils::impl_reflect_common;
use crate::info::Kind;
use crate::{Classify, Reflect};

macro_rules! impl_opaque {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Reflect for $ty {
                impl_reflect_common!(Opaque);
            }

            impl Classify for $ty {
                const KIND: Kind = Kind::Unsupported;
            }
        )*
    };
}

impl_opaque!(i8, i16, u8, u16, i128, u128, isize, usize, f64, char);

impl<T: 'static> Reflect for Option<T> {
    impl_reflect_common!(Opaque);
}

impl<T: 'static> Classify for Option<T> {
    const KIND: Kind = Kind::Unsupported;
}

impl<T: 'static> Reflect for BTreeSet<T> {
    impl_reflect_common!(Opaque);
}

impl<T: 'static> Classify for BTreeSet<T> {
    const KIND: Kind = Kind::Unsupported;
}

impl<T: 'static, S: Default + 'static> Reflect for HashSet<T, S> {
    impl_reflect_common!(Opaque);
}

impl<T: 'static, S: Default + 'static> Classify for HashSet<T, S> {
    const KIND: Kind = Kind::Unsupported;
}

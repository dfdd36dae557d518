/// Expands to the [`Reflect`](crate::Reflect) methods shared by every
/// native type; `$view` names the `ReflectRef`/`ReflectMut` variant.
macro_rules! impl_reflect_common {
    ($view:ident) => {
        #[inline]
        fn reflect_kind(&self) -> $crate::info::Kind {
            <Self as $crate::Classify>::KIND
        }

        #[inline]
        fn reflect_type_name(&self) -> &'static str {
            ::core::any::type_name::<Self>()
        }

        #[inline]
        fn as_any(&self) -> &dyn ::core::any::Any {
            self
        }

        #[inline]
        fn as_any_mut(&mut self) -> &mut dyn ::core::any::Any {
            self
        }

        #[inline]
        fn into_any(self: Box<Self>) -> Box<dyn ::core::any::Any> {
            self
        }

        #[inline]
        fn fresh(&self) -> Box<dyn $crate::Reflect> {
            Box::new(<Self as Default>::default())
        }

        #[inline]
        fn assign(
            &mut self,
            value: Box<dyn $crate::Reflect>,
        ) -> Result<(), $crate::ops::AssignError> {
            $crate::ops::assign_boxed(self, value)
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$view(self)
        }

        #[inline]
        fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
            $crate::ops::ReflectMut::$view(self)
        }
    };
}

pub(crate) use impl_reflect_common;

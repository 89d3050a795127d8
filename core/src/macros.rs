/// Implements `Debug` for a type by printing its type name.
///
/// For wrappers whose internals are not worth exposing (boxed layouts,
/// erased view collections).
#[macro_export]
macro_rules! impl_debug {
    ($ty:ty) => {
        impl core::fmt::Debug for $ty {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(core::any::type_name::<Self>())
            }
        }
    };
}

/// Implements a raw view handled by the rendering backend.
///
/// Implements both [`NativeView`](crate::NativeView) and
/// [`View`](crate::View) for the type; `body` wraps the value in
/// [`Native`](crate::Native) so the backend receives the configuration
/// untouched.
///
/// ```ignore
/// // Default stretch axis (None)
/// raw_view!(ScrollView);
///
/// // With an explicit stretch axis
/// raw_view!(Spacer, StretchAxis::MainAxis);
/// ```
#[macro_export]
macro_rules! raw_view {
    ($ty:ty, $axis:expr) => {
        impl $crate::NativeView for $ty {
            fn stretch_axis(&self) -> $crate::layout::StretchAxis {
                $axis
            }
        }

        impl $crate::View for $ty {
            fn body(self, _env: &$crate::Environment) -> impl $crate::View + use<> {
                $crate::Native::new(self)
            }

            fn stretch_axis(&self) -> $crate::layout::StretchAxis {
                $axis
            }
        }
    };

    ($ty:ty) => {
        $crate::raw_view!($ty, $crate::layout::StretchAxis::None);
    };
}

//! Layout macros.
//!
//! Most records are a plain sequence of fields on the wire; these macros
//! generate their codecs from the field list so the declaration order is
//! the wire order.

/// Implement [`Binary`](robtop_bytes::Binary) by reading and writing the
/// listed fields in order.
macro_rules! sequential_binary {
    ($name:ident { $($field:ident),* $(,)? }) => {
        impl robtop_bytes::Binary for $name {
            fn from_binary(
                reader: &mut robtop_bytes::Reader<'_>,
                options: &robtop_bytes::Options,
            ) -> robtop_bytes::Result<Self> {
                Ok(Self {
                    $($field: robtop_bytes::Binary::from_binary(reader, options)?,)*
                })
            }

            fn to_binary(
                &self,
                writer: &mut robtop_bytes::Writer,
                options: &robtop_bytes::Options,
            ) -> robtop_bytes::Result<()> {
                $(robtop_bytes::Binary::to_binary(&self.$field, writer, options)?;)*
                Ok(())
            }
        }
    };
}

/// Declare an object variant: the struct, a `Default` built on the kind's
/// canonical id, and [`AsObject`](crate::AsObject) through the base field.
///
/// With a leading `@sequential` the codec is generated as well, base first
/// and then every field in declaration order.
macro_rules! object_record {
    (
        @sequential
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($kind:ident) {
            pub $base:ident: $base_ty:ty,
            $(
                $(#[$field_meta:meta])*
                pub $field:ident: $ty:ty = $default:expr,
            )*
        }
    ) => {
        object_record! {
            $(#[$meta])*
            $vis struct $name($kind) {
                pub $base: $base_ty,
                $(
                    $(#[$field_meta])*
                    pub $field: $ty = $default,
                )*
            }
        }

        sequential_binary!($name { $base, $($field),* });
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($kind:ident) {
            pub $base:ident: $base_ty:ty,
            $(
                $(#[$field_meta:meta])*
                pub $field:ident: $ty:ty = $default:expr,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $name {
            pub $base: $base_ty,
            $(
                $(#[$field_meta])*
                pub $field: $ty,
            )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $base: <$base_ty>::new(crate::ObjectKind::$kind.default_id()),
                    $($field: $default,)*
                }
            }
        }

        impl crate::AsObject for $name {
            fn object(&self) -> &crate::Object {
                crate::AsObject::object(&self.$base)
            }

            fn object_mut(&mut self) -> &mut crate::Object {
                crate::AsObject::object_mut(&mut self.$base)
            }
        }
    };
}

use crate::Reflect;
use crate::info::StructInfo;

/// A trait used to power composite-like operations via reflection.
///
/// Field values are reached through the accessors of the [`NamedField`]s,
/// which take the composite as `&dyn Any`.
///
/// [`NamedField`]: crate::info::NamedField
pub trait Composite: Reflect {
    /// Returns the descriptor of the value's type.
    fn reflect_struct_info(&self) -> &'static StructInfo;

    /// Returns the value of the field named `name`, if reachable.
    fn field(&self, name: &str) -> Option<&dyn Reflect> {
        self.reflect_struct_info().field(name)?.get(self.as_any())
    }

    /// Returns the mutable value of the field named `name`, if reachable.
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect> {
        let field = self.reflect_struct_info().field(name)?;
        field.get_mut(self.as_any_mut())
    }
}

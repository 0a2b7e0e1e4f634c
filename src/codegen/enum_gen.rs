// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Enum emission: Rust constant holders and companion `.msg` text.

use prost_types::EnumDescriptorProto;

use super::rename_ident;

/// Emits one schema enum.
///
/// Nested enums are flattened to `Outer_Name` siblings, since ROS has
/// no nested-type concept. Constants are rendered as `u32` values to
/// match the enum field storage.
pub(crate) struct EnumGenerator<'a> {
    descriptor: &'a EnumDescriptorProto,
    parent_prefix: String,
}

impl<'a> EnumGenerator<'a> {
    pub(crate) fn new(descriptor: &'a EnumDescriptorProto, parent_prefix: String) -> Self {
        Self {
            descriptor,
            parent_prefix,
        }
    }

    /// Flattened type name, e.g. `TestMessage_Kind`.
    pub(crate) fn type_name(&self) -> String {
        format!("{}{}", self.parent_prefix, self.descriptor.name())
    }

    /// Emit the Rust constant holder.
    pub(crate) fn generate_rust(&self, out: &mut String) {
        let name = self.type_name();
        out.push_str(&format!("/// Constants of the `{name}` enum.\n"));
        if name.contains('_') {
            out.push_str("#[allow(non_camel_case_types)]\n");
        }
        out.push_str(&format!("pub struct {name};\n\n"));
        out.push_str(&format!("impl {name} {{\n"));
        for value in &self.descriptor.value {
            out.push_str(&format!(
                "    pub const {}: u32 = {};\n",
                rename_ident(value.name()),
                value.number()
            ));
        }
        out.push_str("}\n\n");
    }

    /// Companion `.msg` text: one constant per line.
    pub(crate) fn generate_msg(&self) -> String {
        let name = self.type_name();
        let mut out = String::new();
        for value in &self.descriptor.value {
            out.push_str(&format!(
                "int32 {}_{} = {}\n",
                name,
                value.name(),
                value.number()
            ));
        }
        out
    }
}

// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Message emission: aggregator types in Rust and companion `.msg`
//! text.
//!
//! The emitted struct holds one field slot per schema field in
//! declaration order, with each oneof group collapsed into a composite
//! slot at the position of its first declared member. The emitted
//! `Transcode` impl is the message aggregator: a tag-dispatch loop for
//! Protobuf parsing, positional reads for ROS, presence-gated Protobuf
//! writes, and unconditional ROS writes.

use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::{DescriptorProto, FieldDescriptorProto};

use super::{rename_ident, to_camel};
use crate::core::{CodecError, Result};

#[derive(Clone, Copy, PartialEq, Debug)]
enum FieldKind {
    Scalar,
    Str,
    Message,
    RepeatedScalar,
    RepeatedStr,
    RepeatedMessage,
}

#[derive(Debug)]
struct FieldInfo {
    rust_name: String,
    proto_name: String,
    number: i32,
    decl: String,
    init: String,
    ros_type: String,
    kind: FieldKind,
}

#[derive(Debug)]
struct OneofInfo {
    rust_name: String,
    proto_name: String,
    type_name: String,
    members: Vec<FieldInfo>,
}

#[derive(Debug)]
enum Slot {
    Field(FieldInfo),
    Oneof(OneofInfo),
}

/// Emits one schema message (nested messages are emitted by their own
/// generators, flattened to `Outer_Inner` siblings).
#[derive(Debug)]
pub(crate) struct MessageGenerator<'a> {
    descriptor: &'a DescriptorProto,
    proto_parent: String,
    parent_prefix: String,
    slots: Vec<Slot>,
}

fn scalar_traits(type_: Type) -> Option<(&'static str, &'static str, Option<&'static str>, &'static str)> {
    // (field alias, constructor, sequence encoding override, ros type)
    match type_ {
        Type::Int32 => Some(("Int32Field", "new", None, "int32")),
        Type::Sint32 => Some(("Int32Field", "zigzag", Some("ZigZag"), "int32")),
        Type::Sfixed32 => Some(("Int32Field", "fixed", Some("Fixed"), "int32")),
        Type::Int64 => Some(("Int64Field", "new", None, "int64")),
        Type::Sint64 => Some(("Int64Field", "zigzag", Some("ZigZag"), "int64")),
        Type::Sfixed64 => Some(("Int64Field", "fixed", Some("Fixed"), "int64")),
        Type::Uint32 => Some(("Uint32Field", "new", None, "uint32")),
        Type::Fixed32 => Some(("Uint32Field", "fixed", Some("Fixed"), "uint32")),
        Type::Uint64 => Some(("Uint64Field", "new", None, "uint64")),
        Type::Fixed64 => Some(("Uint64Field", "fixed", Some("Fixed"), "uint64")),
        Type::Double => Some(("DoubleField", "new", None, "float64")),
        Type::Float => Some(("FloatField", "new", None, "float32")),
        Type::Bool => Some(("BoolField", "new", None, "bool")),
        Type::Enum => Some(("EnumField", "new", None, "int32")),
        _ => None,
    }
}

fn is_any(field: &FieldDescriptorProto) -> bool {
    field.type_name().trim_start_matches('.') == "google.protobuf.Any"
}

/// Declared packing: the explicit `[packed = ...]` option wins, else
/// proto3 packs packable scalars by default.
fn packed(field: &FieldDescriptorProto, proto3: bool) -> bool {
    field
        .options
        .as_ref()
        .and_then(|o| o.packed)
        .unwrap_or(proto3)
}

impl<'a> MessageGenerator<'a> {
    /// Build a generator, classifying every field.
    ///
    /// `proto_parent` is the dotted path containing this message (the
    /// package, or `package.Outer` for nested messages);
    /// `parent_prefix` is the underscored flattening prefix for the
    /// emitted type name.
    pub(crate) fn new(
        descriptor: &'a DescriptorProto,
        package: &str,
        proto_parent: String,
        parent_prefix: String,
        proto3: bool,
    ) -> Result<Self> {
        let mut gen = Self {
            descriptor,
            proto_parent,
            parent_prefix,
            slots: Vec::new(),
        };
        gen.compile(package, proto3)?;
        Ok(gen)
    }

    /// Flattened Rust type name, e.g. `TestMessage_Inner`.
    pub(crate) fn type_name(&self) -> String {
        format!("{}{}", self.parent_prefix, self.descriptor.name())
    }

    /// Fully qualified proto name, e.g. `foo.bar.TestMessage.Inner`.
    pub(crate) fn full_name(&self) -> String {
        if self.proto_parent.is_empty() {
            self.descriptor.name().to_string()
        } else {
            format!("{}.{}", self.proto_parent, self.descriptor.name())
        }
    }

    fn message_rust_name(&self, package: &str, type_name: &str) -> String {
        let name = type_name.trim_start_matches('.');
        if name == "google.protobuf.Any" {
            return "AnyMessage".to_string();
        }
        let rel = if package.is_empty() {
            name
        } else {
            name.strip_prefix(&format!("{package}.")).unwrap_or(name)
        };
        rel.replace('.', "_")
    }

    fn field_info(&self, package: &str, proto3: bool, field: &FieldDescriptorProto) -> Result<FieldInfo> {
        let number = field.number();
        let rust_name = rename_ident(field.name());
        let proto_name = field.name().to_string();
        let repeated = field.label() == Label::Repeated;

        match field.r#type() {
            Type::Group => Err(CodecError::unsupported("group fields")),
            Type::Message => {
                let ros_type = if is_any(field) {
                    "Any".to_string()
                } else {
                    self.message_rust_name(package, field.type_name())
                };
                if repeated {
                    let inner = if is_any(field) {
                        "AnyMessage".to_string()
                    } else {
                        ros_type.clone()
                    };
                    Ok(FieldInfo {
                        rust_name,
                        proto_name,
                        number,
                        decl: format!("MessageSeqField<{inner}>"),
                        init: format!("MessageSeqField::new({number})"),
                        ros_type,
                        kind: FieldKind::RepeatedMessage,
                    })
                } else if is_any(field) {
                    Ok(FieldInfo {
                        rust_name,
                        proto_name,
                        number,
                        decl: "AnyField".to_string(),
                        init: format!("AnyField::new({number})"),
                        ros_type,
                        kind: FieldKind::Message,
                    })
                } else {
                    Ok(FieldInfo {
                        rust_name,
                        proto_name,
                        number,
                        decl: format!("MessageField<{ros_type}>"),
                        init: format!("MessageField::new({number})"),
                        ros_type,
                        kind: FieldKind::Message,
                    })
                }
            }
            Type::String | Type::Bytes => {
                let alias = if field.r#type() == Type::Bytes {
                    "BytesField"
                } else {
                    "StringField"
                };
                if repeated {
                    Ok(FieldInfo {
                        rust_name,
                        proto_name,
                        number,
                        decl: "StringSeqField".to_string(),
                        init: format!("StringSeqField::new({number})"),
                        ros_type: "string".to_string(),
                        kind: FieldKind::RepeatedStr,
                    })
                } else {
                    Ok(FieldInfo {
                        rust_name,
                        proto_name,
                        number,
                        decl: alias.to_string(),
                        init: format!("{alias}::new({number})"),
                        ros_type: "string".to_string(),
                        kind: FieldKind::Str,
                    })
                }
            }
            other => {
                let (alias, ctor, seq_encoding, ros_type) = scalar_traits(other)
                    .ok_or_else(|| CodecError::unsupported(format!("field type {other:?}")))?;
                if repeated {
                    let seq_alias = alias.replace("Field", "SeqField");
                    let mut init = format!("{seq_alias}::new({number})");
                    if let Some(encoding) = seq_encoding {
                        init.push_str(&format!(".with_encoding(ScalarEncoding::{encoding})"));
                    }
                    if !packed(field, proto3) {
                        init.push_str(".with_packed(false)");
                    }
                    Ok(FieldInfo {
                        rust_name,
                        proto_name,
                        number,
                        decl: seq_alias,
                        init,
                        ros_type: ros_type.to_string(),
                        kind: FieldKind::RepeatedScalar,
                    })
                } else {
                    Ok(FieldInfo {
                        rust_name,
                        proto_name,
                        number,
                        decl: alias.to_string(),
                        init: format!("{alias}::{ctor}({number})"),
                        ros_type: ros_type.to_string(),
                        kind: FieldKind::Scalar,
                    })
                }
            }
        }
    }

    fn compile(&mut self, package: &str, proto3: bool) -> Result<()> {
        // Map entries are synthesized nested messages; map fields are
        // not supported.
        let map_entries: Vec<String> = self
            .descriptor
            .nested_type
            .iter()
            .filter(|n| n.options.as_ref().map(|o| o.map_entry()).unwrap_or(false))
            .map(|n| format!(".{}.{}", self.full_name(), n.name()))
            .collect();

        for field in &self.descriptor.field {
            if map_entries.iter().any(|e| e == field.type_name()) {
                return Err(CodecError::unsupported("map fields"));
            }
            let info = self.field_info(package, proto3, field)?;

            if let Some(index) = field.oneof_index {
                let oneof_name = self
                    .descriptor
                    .oneof_decl
                    .get(index as usize)
                    .map(|o| o.name().to_string())
                    .unwrap_or_else(|| format!("oneof_{index}"));
                let type_name = format!("{}{}", self.type_name(), to_camel(&oneof_name));
                // One composite slot per oneof, placed at the position
                // of its first declared member.
                let existing = self.slots.iter_mut().find_map(|slot| match slot {
                    Slot::Oneof(o) if o.proto_name == oneof_name => Some(o),
                    _ => None,
                });
                match existing {
                    Some(oneof) => oneof.members.push(info),
                    None => self.slots.push(Slot::Oneof(OneofInfo {
                        rust_name: rename_ident(&oneof_name),
                        proto_name: oneof_name,
                        type_name,
                        members: vec![info],
                    })),
                }
            } else {
                self.slots.push(Slot::Field(info));
            }
        }
        Ok(())
    }

    fn generate_oneof(&self, oneof: &OneofInfo, out: &mut String) {
        let name = &oneof.type_name;

        if name.contains('_') {
            out.push_str("#[allow(non_camel_case_types)]\n");
        }
        out.push_str(&format!("pub struct {name} {{\n"));
        out.push_str("    pub discriminator: u32,\n");
        for member in &oneof.members {
            out.push_str(&format!("    pub {}: {},\n", member.rust_name, member.decl));
        }
        out.push_str("}\n\n");

        out.push_str(&format!("impl {name} {{\n"));
        out.push_str("    pub fn new() -> Self {\n        Self {\n            discriminator: 0,\n");
        for member in &oneof.members {
            out.push_str(&format!("            {}: {},\n", member.rust_name, member.init));
        }
        out.push_str("        }\n    }\n\n");
        out.push_str("    pub fn clear(&mut self) {\n        *self = Self::new();\n    }\n\n");

        out.push_str("    pub fn serialized_proto_size(&self) -> usize {\n");
        out.push_str("        match self.discriminator {\n");
        for member in &oneof.members {
            out.push_str(&format!(
                "            {} => self.{}.serialized_proto_size(),\n",
                member.number, member.rust_name
            ));
        }
        out.push_str("            _ => 0,\n        }\n    }\n\n");

        out.push_str("    pub fn write_proto(&self, encoder: &mut ProtoEncoder) -> Result<()> {\n");
        out.push_str("        match self.discriminator {\n");
        for member in &oneof.members {
            out.push_str(&format!(
                "            {} => self.{}.write_proto(encoder),\n",
                member.number, member.rust_name
            ));
        }
        out.push_str("            _ => Ok(()),\n        }\n    }\n\n");

        out.push_str("    pub fn serialized_ros_size(&self) -> usize {\n");
        out.push_str("        let mut size = 4;\n");
        for member in &oneof.members {
            if member.kind == FieldKind::Message {
                out.push_str(&format!(
                    "        size += self.{}.serialized_ros_size_optional(self.discriminator == {});\n",
                    member.rust_name, member.number
                ));
            } else {
                out.push_str(&format!(
                    "        size += self.{}.serialized_ros_size();\n",
                    member.rust_name
                ));
            }
        }
        out.push_str("        size\n    }\n\n");

        out.push_str("    pub fn write_ros(&self, encoder: &mut RosEncoder) -> Result<()> {\n");
        out.push_str("        encoder.int32(self.discriminator as i32)?;\n");
        for member in &oneof.members {
            if member.kind == FieldKind::Message {
                out.push_str(&format!(
                    "        self.{}.write_ros_optional(self.discriminator == {}, encoder)?;\n",
                    member.rust_name, member.number
                ));
            } else {
                out.push_str(&format!(
                    "        self.{}.write_ros(encoder)?;\n",
                    member.rust_name
                ));
            }
        }
        out.push_str("        Ok(())\n    }\n\n");

        out.push_str("    pub fn parse_ros(&mut self, cursor: &mut RosCursor<'_>) -> Result<()> {\n");
        out.push_str("        self.discriminator = cursor.read_i32()? as u32;\n");
        for member in &oneof.members {
            if member.kind == FieldKind::Message {
                out.push_str(&format!(
                    "        self.{}.parse_ros_optional(cursor)?;\n",
                    member.rust_name
                ));
            } else {
                out.push_str(&format!(
                    "        self.{}.parse_ros(cursor)?;\n",
                    member.rust_name
                ));
            }
        }
        out.push_str("        Ok(())\n    }\n}\n\n");

        out.push_str(&format!(
            "impl Default for {name} {{\n    fn default() -> Self {{\n        Self::new()\n    }}\n}}\n\n"
        ));
    }

    /// Emit the message struct, its impls, and its oneof structs.
    pub(crate) fn generate_rust(&self, out: &mut String) {
        for slot in &self.slots {
            if let Slot::Oneof(oneof) = slot {
                self.generate_oneof(oneof, out);
            }
        }

        let name = self.type_name();

        if name.contains('_') {
            out.push_str("#[allow(non_camel_case_types)]\n");
        }
        out.push_str(&format!("pub struct {name} {{\n    populated: bool,\n"));
        for slot in &self.slots {
            match slot {
                Slot::Field(field) => {
                    out.push_str(&format!("    pub {}: {},\n", field.rust_name, field.decl));
                }
                Slot::Oneof(oneof) => {
                    out.push_str(&format!("    pub {}: {},\n", oneof.rust_name, oneof.type_name));
                }
            }
        }
        out.push_str("}\n\n");

        out.push_str(&format!("impl {name} {{\n"));
        out.push_str(&format!(
            "    pub const FULL_NAME: &'static str = \"{}\";\n",
            self.full_name()
        ));
        out.push_str(&format!(
            "    pub const NAME: &'static str = \"{}\";\n\n",
            self.descriptor.name()
        ));
        out.push_str("    pub fn new() -> Self {\n        Self {\n            populated: false,\n");
        for slot in &self.slots {
            match slot {
                Slot::Field(field) => {
                    out.push_str(&format!("            {}: {},\n", field.rust_name, field.init));
                }
                Slot::Oneof(oneof) => {
                    out.push_str(&format!(
                        "            {}: {}::new(),\n",
                        oneof.rust_name, oneof.type_name
                    ));
                }
            }
        }
        out.push_str("        }\n    }\n\n");
        out.push_str("    pub fn is_populated(&self) -> bool {\n        self.populated\n    }\n");
        out.push_str("}\n\n");

        out.push_str(&format!(
            "impl Default for {name} {{\n    fn default() -> Self {{\n        Self::new()\n    }}\n}}\n\n"
        ));

        self.generate_transcode(&name, out);
    }

    fn generate_transcode(&self, name: &str, out: &mut String) {
        out.push_str(&format!("impl Transcode for {name} {{\n"));

        // parse_proto: tag dispatch loop.
        out.push_str("    fn parse_proto(&mut self, cursor: &mut ProtoCursor<'_>) -> Result<()> {\n");
        out.push_str("        if self.populated {\n");
        out.push_str("            return Err(CodecError::already_populated(Self::FULL_NAME));\n");
        out.push_str("        }\n        self.populated = true;\n");
        out.push_str("        while !cursor.at_end() {\n");
        out.push_str("            let (number, wire) = cursor.read_tag()?;\n");
        out.push_str("            match number {\n");
        for slot in &self.slots {
            match slot {
                Slot::Field(field) => match field.kind {
                    FieldKind::RepeatedScalar => out.push_str(&format!(
                        "                {} => self.{}.parse_proto(wire, cursor)?,\n",
                        field.number, field.rust_name
                    )),
                    _ => out.push_str(&format!(
                        "                {} => self.{}.parse_proto(cursor)?,\n",
                        field.number, field.rust_name
                    )),
                },
                Slot::Oneof(oneof) => {
                    for member in &oneof.members {
                        out.push_str(&format!(
                            "                {} => {{\n                    self.{}.clear();\n                    self.{}.{}.parse_proto(cursor)?;\n                    self.{}.discriminator = {};\n                }}\n",
                            member.number,
                            oneof.rust_name,
                            oneof.rust_name,
                            member.rust_name,
                            oneof.rust_name,
                            member.number
                        ));
                    }
                }
            }
        }
        out.push_str("                _ => cursor.skip_value(wire)?,\n");
        out.push_str("            }\n        }\n        Ok(())\n    }\n\n");

        // write_proto: presence-gated singular slots.
        out.push_str("    fn write_proto(&self, encoder: &mut ProtoEncoder) -> Result<()> {\n");
        for slot in &self.slots {
            match slot {
                Slot::Field(field) => match field.kind {
                    FieldKind::Scalar | FieldKind::Str | FieldKind::Message => {
                        out.push_str(&format!(
                            "        if self.{0}.is_present() {{\n            self.{0}.write_proto(encoder)?;\n        }}\n",
                            field.rust_name
                        ));
                    }
                    _ => out.push_str(&format!(
                        "        self.{}.write_proto(encoder)?;\n",
                        field.rust_name
                    )),
                },
                Slot::Oneof(oneof) => out.push_str(&format!(
                    "        self.{}.write_proto(encoder)?;\n",
                    oneof.rust_name
                )),
            }
        }
        out.push_str("        Ok(())\n    }\n\n");

        // serialized_proto_size mirrors write_proto.
        out.push_str("    fn serialized_proto_size(&self) -> usize {\n");
        if self.slots.is_empty() {
            out.push_str("        0\n");
        } else {
            out.push_str("        let mut size = 0;\n");
            for slot in &self.slots {
                match slot {
                    Slot::Field(field) => match field.kind {
                        FieldKind::Scalar | FieldKind::Str | FieldKind::Message => {
                            out.push_str(&format!(
                                "        if self.{0}.is_present() {{\n            size += self.{0}.serialized_proto_size();\n        }}\n",
                                field.rust_name
                            ));
                        }
                        _ => out.push_str(&format!(
                            "        size += self.{}.serialized_proto_size();\n",
                            field.rust_name
                        )),
                    },
                    Slot::Oneof(oneof) => out.push_str(&format!(
                        "        size += self.{}.serialized_proto_size();\n",
                        oneof.rust_name
                    )),
                }
            }
            out.push_str("        size\n");
        }
        out.push_str("    }\n\n");

        // parse_ros: positional reads in slot order.
        out.push_str("    fn parse_ros(&mut self, cursor: &mut RosCursor<'_>) -> Result<()> {\n");
        out.push_str("        if self.populated {\n");
        out.push_str("            return Err(CodecError::already_populated(Self::FULL_NAME));\n");
        out.push_str("        }\n        self.populated = true;\n");
        for slot in &self.slots {
            let slot_name = match slot {
                Slot::Field(field) => &field.rust_name,
                Slot::Oneof(oneof) => &oneof.rust_name,
            };
            out.push_str(&format!("        self.{slot_name}.parse_ros(cursor)?;\n"));
        }
        out.push_str("        Ok(())\n    }\n\n");

        // write_ros: every slot, unconditionally.
        out.push_str("    fn write_ros(&self, encoder: &mut RosEncoder) -> Result<()> {\n");
        for slot in &self.slots {
            let slot_name = match slot {
                Slot::Field(field) => &field.rust_name,
                Slot::Oneof(oneof) => &oneof.rust_name,
            };
            out.push_str(&format!("        self.{slot_name}.write_ros(encoder)?;\n"));
        }
        out.push_str("        Ok(())\n    }\n\n");

        out.push_str("    fn serialized_ros_size(&self) -> usize {\n");
        if self.slots.is_empty() {
            out.push_str("        0\n");
        } else {
            out.push_str("        let mut size = 0;\n");
            for slot in &self.slots {
                let slot_name = match slot {
                    Slot::Field(field) => &field.rust_name,
                    Slot::Oneof(oneof) => &oneof.rust_name,
                };
                out.push_str(&format!(
                    "        size += self.{slot_name}.serialized_ros_size();\n"
                ));
            }
            out.push_str("        size\n");
        }
        out.push_str("    }\n\n");

        out.push_str("    fn full_name(&self) -> &'static str {\n        Self::FULL_NAME\n    }\n\n");
        out.push_str("    fn short_name(&self) -> &'static str {\n        Self::NAME\n    }\n");
        out.push_str("}\n\n");
    }

    /// Companion `.msg` text: one field per line in slot order, oneofs
    /// expanded as a discriminator plus every member.
    pub(crate) fn generate_msg(&self) -> String {
        let mut out = String::new();
        for slot in &self.slots {
            match slot {
                Slot::Field(field) => match field.kind {
                    FieldKind::RepeatedScalar | FieldKind::RepeatedStr | FieldKind::RepeatedMessage => {
                        out.push_str(&format!("{}[] {}\n", field.ros_type, field.proto_name));
                    }
                    _ => out.push_str(&format!("{} {}\n", field.ros_type, field.proto_name)),
                },
                Slot::Oneof(oneof) => {
                    out.push_str(&format!("int32 {}_discriminator\n", oneof.proto_name));
                    for member in &oneof.members {
                        if member.kind == FieldKind::Message {
                            // Message members are a zero-or-one array
                            // so they can be absent.
                            out.push_str(&format!("{}[] {}\n", member.ros_type, member.proto_name));
                        } else {
                            out.push_str(&format!("{} {}\n", member.ros_type, member.proto_name));
                        }
                    }
                }
            }
        }
        out
    }
}

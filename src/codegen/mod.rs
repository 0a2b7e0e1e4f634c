// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Schema-driven emitter.
//!
//! Walks `prost-types` descriptors and emits, per schema file, a Rust
//! module instantiating the runtime for every message (field slots,
//! oneof structs, the `Transcode` aggregator impl, and a
//! `register_types()` startup hook), plus one companion `.msg` text
//! file per message and enum describing the ROS field layout. All
//! artifacts go to a [`FileSink`]; archiving them (e.g. into a zip) is
//! the harness's concern.

pub mod enum_gen;
pub mod message_gen;
pub mod sink;

pub use sink::{DirSink, FileSink, MemorySink};

use prost::Message as _;
use prost_types::{DescriptorProto, FileDescriptorProto};
use tracing::debug;

use crate::core::{CodecError, Result};
use enum_gen::EnumGenerator;
use message_gen::MessageGenerator;

/// Options recognized by the emitter.
///
/// Mirrors the plugin parameter list: a comma-separated sequence of
/// `key=value` pairs.
#[derive(Debug, Clone, Default)]
pub struct GeneratorOptions {
    /// Extra module namespace to inject around the emitted code.
    pub add_namespace: String,
    /// Top-level output directory.
    pub package_name: String,
    /// Sub-directory under the package directory.
    pub target_name: String,
}

impl GeneratorOptions {
    /// Parse a `key=value,key=value` parameter string.
    ///
    /// Unknown keys are ignored.
    pub fn from_parameter(parameter: &str) -> Self {
        let mut options = Self::default();
        for pair in parameter.split(',') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            match key.trim() {
                "add_namespace" => options.add_namespace = value.trim().to_string(),
                "package_name" => options.package_name = value.trim().to_string(),
                "target_name" => options.target_name = value.trim().to_string(),
                _ => {}
            }
        }
        options
    }
}

/// Rust keywords that must not be used as emitted identifiers.
const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub",
    "ref", "return", "self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Rename identifiers colliding with a Rust keyword by appending a
/// trailing underscore. Stable for a given identifier.
pub(crate) fn rename_ident(name: &str) -> String {
    if RUST_KEYWORDS.contains(&name) {
        format!("{name}_")
    } else {
        name.to_string()
    }
}

/// snake_case to CamelCase.
pub(crate) fn to_camel(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut capitalize_next = true;
    for c in name.chars() {
        if c == '_' {
            capitalize_next = true;
        } else if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }
    result
}

/// Compute the output path for a schema file.
///
/// Bazel virtual-import prefixes are stripped so the path reflects the
/// schema's own location.
fn generated_filename(package_name: &str, target_name: &str, file_name: &str) -> String {
    let mut name = file_name.to_string();
    if let Some(pos) = name.find("_virtual_imports/") {
        name = name[pos + "_virtual_imports/".len()..].to_string();
        if let Some(slash) = name.find('/') {
            name = name[slash + 1..].to_string();
        }
    }
    let mut path = String::new();
    for part in [package_name, target_name] {
        if !part.is_empty() {
            path.push_str(part);
            path.push('/');
        }
    }
    path.push_str(&name);
    path
}

fn indent(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    for line in body.lines() {
        if line.is_empty() {
            out.push('\n');
        } else {
            out.push_str("    ");
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

/// Emits all artifacts for one schema file.
pub struct Generator<'a> {
    file: &'a FileDescriptorProto,
    options: &'a GeneratorOptions,
}

impl<'a> Generator<'a> {
    /// Create a generator for a schema file.
    pub fn new(file: &'a FileDescriptorProto, options: &'a GeneratorOptions) -> Self {
        Self { file, options }
    }

    fn build_message_gens(
        &self,
        messages: &'a [DescriptorProto],
        proto_parent: &str,
        parent_prefix: &str,
        out: &mut Vec<MessageGenerator<'a>>,
    ) -> Result<()> {
        let package = self.file.package();
        let proto3 = self.file.syntax() == "proto3";
        for message in messages {
            let full_name = if proto_parent.is_empty() {
                message.name().to_string()
            } else {
                format!("{proto_parent}.{}", message.name())
            };
            // The Any runtime type is hand-coded; never emit it.
            if full_name == "google.protobuf.Any" {
                continue;
            }
            if message
                .options
                .as_ref()
                .map(|o| o.map_entry())
                .unwrap_or(false)
            {
                continue;
            }
            let nested_parent = full_name.clone();
            let nested_prefix = format!("{parent_prefix}{}_", message.name());
            out.push(MessageGenerator::new(
                message,
                package,
                proto_parent.to_string(),
                parent_prefix.to_string(),
                proto3,
            )?);
            self.build_message_gens(&message.nested_type, &nested_parent, &nested_prefix, out)?;
        }
        Ok(())
    }

    fn build_enum_gens(
        messages: &'a [DescriptorProto],
        parent_prefix: &str,
        out: &mut Vec<EnumGenerator<'a>>,
    ) {
        for message in messages {
            let prefix = format!("{parent_prefix}{}_", message.name());
            for enum_ in &message.enum_type {
                out.push(EnumGenerator::new(enum_, prefix.clone()));
            }
            Self::build_enum_gens(&message.nested_type, &prefix, out);
        }
    }

    /// Emit every artifact for this schema file into the sink.
    pub fn generate(&self, sink: &mut dyn FileSink) -> Result<()> {
        debug!(file = self.file.name(), "generating transcoder module");

        let mut message_gens = Vec::new();
        self.build_message_gens(&self.file.message_type, self.file.package(), "", &mut message_gens)?;

        let mut enum_gens: Vec<EnumGenerator<'a>> = self
            .file
            .enum_type
            .iter()
            .map(|e| EnumGenerator::new(e, String::new()))
            .collect();
        Self::build_enum_gens(&self.file.message_type, "", &mut enum_gens);

        // Rust module.
        let mut body = String::new();
        if !message_gens.is_empty() {
            body.push_str("use protoros::core::{registry, CodecError, Result, Transcode};\n");
            body.push_str("use protoros::encoding::protobuf::{ProtoCursor, ProtoEncoder};\n");
            body.push_str("use protoros::encoding::ros::{RosCursor, RosEncoder};\n");
            body.push_str("use protoros::fields::*;\n\n");
        }
        for enum_gen in &enum_gens {
            enum_gen.generate_rust(&mut body);
        }
        for message_gen in &message_gens {
            message_gen.generate_rust(&mut body);
        }
        if !message_gens.is_empty() {
            body.push_str("/// Publish every message type in this module to the global\n");
            body.push_str("/// registry. Call once during startup, before decoding any\n");
            body.push_str("/// `google.protobuf.Any` value that may name these types.\n");
            body.push_str("pub fn register_types() {\n");
            for message_gen in &message_gens {
                body.push_str(&format!(
                    "    registry::register_message({0}::FULL_NAME, || Box::new({0}::new()));\n",
                    message_gen.type_name()
                ));
            }
            body.push_str("}\n");
        }

        let mut content = format!(
            "// @generated by protoros from {}. Do not edit.\n\n",
            self.file.name()
        );
        if self.options.add_namespace.is_empty() {
            content.push_str(&body);
        } else {
            content.push_str(&format!("pub mod {} {{\n", self.options.add_namespace));
            content.push_str(&indent(&body));
            content.push_str("}\n");
        }

        let rust_path = {
            let path = generated_filename(
                &self.options.package_name,
                &self.options.target_name,
                self.file.name(),
            );
            match path.strip_suffix(".proto") {
                Some(stem) => format!("{stem}.rs"),
                None => format!("{path}.rs"),
            }
        };
        sink.write_file(&rust_path, content.as_bytes())?;

        // Companion .msg files, one per message and enum, under the
        // schema package directory.
        let package_dir = self.file.package().replace('.', "_");
        for message_gen in &message_gens {
            let path = format!("{package_dir}/msg/{}.msg", message_gen.type_name());
            debug!(path = path.as_str(), "writing ROS message definition");
            sink.write_file(&path, message_gen.generate_msg().as_bytes())?;
        }
        for enum_gen in &enum_gens {
            let path = format!("{package_dir}/msg/{}.msg", enum_gen.type_name());
            debug!(path = path.as_str(), "writing ROS message definition");
            sink.write_file(&path, enum_gen.generate_msg().as_bytes())?;
        }
        Ok(())
    }
}

/// Emit artifacts for every file in a serialized `FileDescriptorSet`.
pub fn generate_file_descriptor_set(
    bytes: &[u8],
    options: &GeneratorOptions,
    sink: &mut dyn FileSink,
) -> Result<()> {
    let fds = prost_types::FileDescriptorSet::decode(bytes)
        .map_err(|e| CodecError::unsupported(format!("invalid FileDescriptorSet: {e}")))?;
    for file in &fds.file {
        Generator::new(file, options).generate(sink)?;
    }
    Ok(())
}

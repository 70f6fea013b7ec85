//! Type-driven mock value synthesis.
//!
//! Given a declared type, produce a representative sample value so a
//! component can render without real data. Fidelity trade-offs are
//! deliberate and documented:
//!
//! - booleans are always `false` (the field name is never consulted),
//! - arrays get exactly two copies of one element sample, synthesized with an
//!   empty field name,
//! - unions sample only their first member,
//! - a visited set guards against cyclic type graphs, substituting `null` on
//!   re-entry instead of recursing forever.

use std::collections::HashSet;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use swc_ecma_ast::{
    Expr, TsEntityName, TsInterfaceDecl, TsKeywordTypeKind, TsLit, TsType, TsTypeElement,
    TsTypeLit, TsUnionOrIntersectionType,
};

use crate::core::loader::SourceLoader;
use crate::core::resolve::{TypeDecl, resolve_type};
use crate::core::value::{EnumDescriptor, EnumMetadata, MockValue, PropsBundle};

/// Synthesize a full props object for an interface declaration.
///
/// `context_file` is the file the declaration was found in; type names it
/// mentions are resolved relative to that file.
pub fn synthesize_interface(
    loader: &mut SourceLoader,
    decl: &TsInterfaceDecl,
    context_file: &Path,
) -> PropsBundle {
    let mut synth = Synthesizer {
        loader,
        enums: EnumMetadata::new(),
        visiting: HashSet::new(),
    };
    // The root interface itself participates in cycle detection.
    synth.visiting.insert(decl.id.sym.to_string());
    let value = synth.interface_value(decl, context_file);

    PropsBundle {
        value,
        enums: synth.enums,
    }
}

/// Synthesize a sample value for one declared type node.
///
/// Entry point for callers holding a bare type (e.g. a single field preview);
/// `synthesize_interface` is the usual whole-props path.
pub fn synthesize_type(
    loader: &mut SourceLoader,
    ty: &TsType,
    field_name: &str,
    context_file: &Path,
) -> PropsBundle {
    let mut synth = Synthesizer {
        loader,
        enums: EnumMetadata::new(),
        visiting: HashSet::new(),
    };
    let value = synth.value_for_type(ty, field_name, context_file);

    PropsBundle {
        value,
        enums: synth.enums,
    }
}

struct Synthesizer<'a> {
    loader: &'a mut SourceLoader,
    enums: EnumMetadata,
    /// Type names currently being synthesized on this call stack.
    visiting: HashSet<String>,
}

impl Synthesizer<'_> {
    fn interface_value(&mut self, decl: &TsInterfaceDecl, context_file: &Path) -> MockValue {
        let fields = self.member_values(&decl.body.body, context_file);
        MockValue::Object(fields)
    }

    fn type_lit_value(&mut self, lit: &TsTypeLit, context_file: &Path) -> MockValue {
        let fields = self.member_values(&lit.members, context_file);
        MockValue::Object(fields)
    }

    /// Synthesize every property signature that carries a type annotation.
    /// Method and index signatures are skipped.
    fn member_values(
        &mut self,
        members: &[TsTypeElement],
        context_file: &Path,
    ) -> Vec<(String, MockValue)> {
        let mut fields = Vec::new();
        for member in members {
            if let TsTypeElement::TsPropertySignature(prop) = member
                && let Some(name) = property_name(&prop.key)
                && let Some(type_ann) = &prop.type_ann
            {
                let value = self.value_for_type(&type_ann.type_ann, &name, context_file);
                fields.push((name, value));
            }
        }
        fields
    }

    fn value_for_type(&mut self, ty: &TsType, field_name: &str, context_file: &Path) -> MockValue {
        match ty {
            TsType::TsKeywordType(keyword) => match keyword.kind {
                TsKeywordTypeKind::TsStringKeyword => string_sample(field_name),
                TsKeywordTypeKind::TsNumberKeyword => number_sample(field_name),
                TsKeywordTypeKind::TsBooleanKeyword => MockValue::Bool(false),
                TsKeywordTypeKind::TsAnyKeyword | TsKeywordTypeKind::TsUnknownKeyword => {
                    string_sample(field_name)
                }
                _ => MockValue::Null,
            },

            TsType::TsFnOrConstructorType(_) => MockValue::Function {
                name: field_name.to_string(),
            },

            // One element sample, synthesized with an empty field name, then
            // duplicated into two independent copies.
            TsType::TsArrayType(array) => {
                let sample = self.value_for_type(&array.elem_type, "", context_file);
                MockValue::Array(vec![sample.clone(), sample])
            }

            TsType::TsUnionOrIntersectionType(union) => {
                let first = match union {
                    TsUnionOrIntersectionType::TsUnionType(u) => u.types.first(),
                    TsUnionOrIntersectionType::TsIntersectionType(i) => i.types.first(),
                };
                match first {
                    Some(member) => self.value_for_type(member, field_name, context_file),
                    None => MockValue::Null,
                }
            }

            TsType::TsLitType(lit) => match &lit.lit {
                TsLit::Str(s) => {
                    MockValue::String(s.value.as_str().unwrap_or_default().to_string())
                }
                TsLit::Number(n) => MockValue::Number(n.value),
                TsLit::Bool(b) => MockValue::Bool(b.value),
                _ => MockValue::Null,
            },

            TsType::TsTypeRef(type_ref) => {
                self.value_for_named(&type_ref.type_name, field_name, context_file)
            }

            TsType::TsTypeLit(lit) => self.type_lit_value(lit, context_file),

            TsType::TsParenthesizedType(paren) => {
                self.value_for_type(&paren.type_ann, field_name, context_file)
            }

            // readonly T[], keyof-free operators: synthesize the inner type.
            TsType::TsTypeOperator(op) => {
                self.value_for_type(&op.type_ann, field_name, context_file)
            }

            TsType::TsOptionalType(opt) => {
                self.value_for_type(&opt.type_ann, field_name, context_file)
            }

            _ => MockValue::Null,
        }
    }

    fn value_for_named(
        &mut self,
        entity: &TsEntityName,
        field_name: &str,
        context_file: &Path,
    ) -> MockValue {
        let TsEntityName::Ident(ident) = entity else {
            // Qualified names (JSX.Element) only match the special table.
            return special_or_fallback(&entity_name(entity), field_name);
        };
        let type_name = ident.sym.to_string();

        // Cycle guard: re-entering a type already being synthesized
        // substitutes a terminal placeholder.
        if !self.visiting.insert(type_name.clone()) {
            return MockValue::Null;
        }

        let value = match resolve_type(self.loader, &type_name, context_file) {
            Some(resolved) => match resolved.decl {
                TypeDecl::Enum(enum_decl) => {
                    let descriptor = EnumDescriptor::from_decl(&enum_decl);
                    let sample = descriptor.sample().unwrap_or(MockValue::Null);
                    self.enums.insert(field_name.to_string(), descriptor);
                    sample
                }
                TypeDecl::Interface(interface) => {
                    // Nested references resolve relative to the file the
                    // interface was found in, not the original context.
                    self.interface_value(&interface, &resolved.found_in)
                }
            },
            None => special_or_fallback(&type_name, field_name),
        };

        self.visiting.remove(&type_name);
        value
    }
}

/// Rules for unresolved named types: renderable-node markers, dates, and
/// file-like types get dedicated samples; everything else falls back to a
/// single synthetic field.
fn special_or_fallback(type_name: &str, field_name: &str) -> MockValue {
    match type_name {
        "ReactNode" | "ReactElement" | "JSX.Element" => MockValue::Null,
        "Date" => MockValue::Number(epoch_millis() as f64),
        "File" | "Blob" => MockValue::Object(vec![
            ("name".to_string(), MockValue::String("mock-file.txt".to_string())),
            ("size".to_string(), MockValue::Number(1024.0)),
            ("type".to_string(), MockValue::String("text/plain".to_string())),
        ]),
        _ => MockValue::Object(vec![(
            format!("mock{}", capitalize(field_name)),
            MockValue::String(format!("Mock {}", field_name)),
        )]),
    }
}

/// Ordered substring rules for string fields; first match wins. The `name`
/// rule and the default produce the same shape on purpose, so an empty field
/// name (array element synthesis) yields `"Mock "`.
fn string_sample(field_name: &str) -> MockValue {
    let lower = field_name.to_lowercase();

    let value = if lower.contains("id") {
        "mock-id-123".to_string()
    } else if lower.contains("title") {
        "Mock Title".to_string()
    } else if lower.contains("name") {
        format!("Mock {}", field_name)
    } else if lower.contains("email") {
        "mock@example.com".to_string()
    } else if lower.contains("url") || lower.contains("link") {
        "https://example.com/mock".to_string()
    } else if lower.contains("path") {
        "/mock/path".to_string()
    } else if lower.contains("date") {
        "2024-01-15".to_string()
    } else if lower.contains("time") {
        "12:34".to_string()
    } else if lower.contains("duration") {
        "3:45".to_string()
    } else if lower.contains("color") {
        "#4F46E5".to_string()
    } else if lower.contains("thumbnail") {
        "https://example.com/thumbnail.jpg".to_string()
    } else {
        format!("Mock {}", field_name)
    };

    MockValue::String(value)
}

/// Ordered keyword rules for number fields; the fallback constant is 123.
fn number_sample(field_name: &str) -> MockValue {
    let lower = field_name.to_lowercase();

    let value = if lower.contains("count") || lower.contains("total") {
        42.0
    } else if lower.contains("views") {
        1024.0
    } else if lower.contains("price") || lower.contains("cost") {
        99.0
    } else if lower.contains("percent") {
        50.0
    } else if lower.contains("index") {
        0.0
    } else {
        123.0
    };

    MockValue::Number(value)
}

fn entity_name(entity: &TsEntityName) -> String {
    match entity {
        TsEntityName::Ident(ident) => ident.sym.to_string(),
        TsEntityName::TsQualifiedName(qualified) => {
            format!("{}.{}", entity_name(&qualified.left), qualified.right.sym)
        }
    }
}

fn property_name(key: &Expr) -> Option<String> {
    match key {
        Expr::Ident(ident) => Some(ident.sym.to_string()),
        Expr::Lit(swc_ecma_ast::Lit::Str(s)) => s.value.as_str().map(str::to_string),
        _ => None,
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn epoch_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;
    use tempfile::{TempDir, tempdir};

    use super::*;

    /// Write a fixture file, resolve `interface_name` in it, synthesize.
    fn synthesize_fixture(code: &str, interface_name: &str) -> PropsBundle {
        let (bundle, _dir) = synthesize_fixture_keep_dir(code, interface_name);
        bundle
    }

    fn synthesize_fixture_keep_dir(code: &str, interface_name: &str) -> (PropsBundle, TempDir) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fixture.tsx");
        fs::write(&path, code).unwrap();

        let mut loader = SourceLoader::new();
        let resolved = resolve_type(&mut loader, interface_name, &path).unwrap();
        let TypeDecl::Interface(interface) = resolved.decl else {
            panic!("fixture interface expected");
        };
        let bundle = synthesize_interface(&mut loader, &interface, &resolved.found_in);
        (bundle, dir)
    }

    fn field<'a>(value: &'a MockValue, name: &str) -> &'a MockValue {
        let MockValue::Object(fields) = value else {
            panic!("object expected, got {:?}", value);
        };
        &fields
            .iter()
            .find(|(n, _)| n == name)
            .unwrap_or_else(|| panic!("missing field {}", name))
            .1
    }

    #[test]
    fn test_string_and_number_fields() {
        let bundle =
            synthesize_fixture("interface Props { name: string; age: number; }", "Props");

        assert_eq!(
            bundle.value,
            MockValue::Object(vec![
                ("name".to_string(), MockValue::String("Mock name".to_string())),
                ("age".to_string(), MockValue::Number(123.0)),
            ])
        );
        assert!(bundle.enums.is_empty());
    }

    #[test]
    fn test_string_keyword_rules() {
        let bundle = synthesize_fixture(
            "interface Props { userId: string; email: string; avatarUrl: string; color: string; }",
            "Props",
        );

        assert_eq!(
            field(&bundle.value, "userId"),
            &MockValue::String("mock-id-123".to_string())
        );
        assert_eq!(
            field(&bundle.value, "email"),
            &MockValue::String("mock@example.com".to_string())
        );
        assert_eq!(
            field(&bundle.value, "avatarUrl"),
            &MockValue::String("https://example.com/mock".to_string())
        );
        assert_eq!(
            field(&bundle.value, "color"),
            &MockValue::String("#4F46E5".to_string())
        );
    }

    #[test]
    fn test_number_keyword_rules() {
        let bundle = synthesize_fixture(
            "interface Props { itemCount: number; viewsTotal: number; price: number; }",
            "Props",
        );

        // "viewsTotal" contains both rules; "count"/"total" is checked first.
        assert_eq!(field(&bundle.value, "itemCount"), &MockValue::Number(42.0));
        assert_eq!(field(&bundle.value, "viewsTotal"), &MockValue::Number(42.0));
        assert_eq!(field(&bundle.value, "price"), &MockValue::Number(99.0));
    }

    #[test]
    fn test_boolean_always_false() {
        let bundle = synthesize_fixture(
            "interface Props { isActive: boolean; disabled: boolean; }",
            "Props",
        );

        assert_eq!(field(&bundle.value, "isActive"), &MockValue::Bool(false));
        assert_eq!(field(&bundle.value, "disabled"), &MockValue::Bool(false));
    }

    #[test]
    fn test_function_placeholder_tagged_with_field_name() {
        let bundle = synthesize_fixture(
            "interface Props { onClick: (e: MouseEvent) => void; }",
            "Props",
        );

        assert_eq!(
            field(&bundle.value, "onClick"),
            &MockValue::Function {
                name: "onClick".to_string()
            }
        );
    }

    #[test]
    fn test_array_two_independent_elements_with_empty_field_name() {
        let bundle = synthesize_fixture("interface Props { tags: string[]; }", "Props");

        let MockValue::Array(mut elements) = field(&bundle.value, "tags").clone() else {
            panic!("array expected");
        };
        assert_eq!(elements.len(), 2);
        // Element synthesis ignores the outer field name: "Mock " exactly.
        assert_eq!(elements[0], MockValue::String("Mock ".to_string()));
        assert_eq!(elements[1], MockValue::String("Mock ".to_string()));

        // Mutating one copy must not affect the other.
        elements[0] = MockValue::String("changed".to_string());
        assert_eq!(elements[1], MockValue::String("Mock ".to_string()));
    }

    #[test]
    fn test_union_samples_first_member_only() {
        let bundle = synthesize_fixture(
            "interface Props { size: \"small\" | \"large\"; mixed: number | string; }",
            "Props",
        );

        assert_eq!(
            field(&bundle.value, "size"),
            &MockValue::String("small".to_string())
        );
        assert_eq!(field(&bundle.value, "mixed"), &MockValue::Number(123.0));
    }

    #[test]
    fn test_literal_type_uses_its_own_value() {
        let bundle = synthesize_fixture(
            "interface Props { kind: \"card\"; version: 3; flag: true; }",
            "Props",
        );

        assert_eq!(
            field(&bundle.value, "kind"),
            &MockValue::String("card".to_string())
        );
        assert_eq!(field(&bundle.value, "version"), &MockValue::Number(3.0));
        assert_eq!(field(&bundle.value, "flag"), &MockValue::Bool(true));
    }

    #[test]
    fn test_enum_field_samples_first_member_and_records_descriptor() {
        let bundle = synthesize_fixture(
            "enum Status { Active = \"active\", Inactive }\ninterface Props { status: Status; }",
            "Props",
        );

        assert_eq!(
            field(&bundle.value, "status"),
            &MockValue::String("active".to_string())
        );
        let descriptor = bundle.enums.get("status").unwrap();
        assert_eq!(descriptor.members.len(), 2);
        assert_eq!(descriptor.members[0].name, "Active");
    }

    #[test]
    fn test_nested_interface_recurses() {
        let bundle = synthesize_fixture(
            "interface Author { name: string; }\ninterface Props { author: Author; }",
            "Props",
        );

        assert_eq!(
            field(&bundle.value, "author"),
            &MockValue::Object(vec![(
                "name".to_string(),
                MockValue::String("Mock name".to_string())
            )])
        );
    }

    #[test]
    fn test_inline_object_type_recurses() {
        let bundle = synthesize_fixture(
            "interface Props { meta: { title: string; count: number }; }",
            "Props",
        );

        assert_eq!(
            field(&bundle.value, "meta"),
            &MockValue::Object(vec![
                ("title".to_string(), MockValue::String("Mock Title".to_string())),
                ("count".to_string(), MockValue::Number(42.0)),
            ])
        );
    }

    #[test]
    fn test_imported_interface_resolves_across_files() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("author.ts"),
            "export interface Author { name: string; }\n",
        )
        .unwrap();
        let card: PathBuf = dir.path().join("Card.tsx");
        fs::write(
            &card,
            "import { Author } from \"./author\";\nexport interface CardProps { author: Author; }\n",
        )
        .unwrap();

        let mut loader = SourceLoader::new();
        let resolved = resolve_type(&mut loader, "CardProps", &card).unwrap();
        let TypeDecl::Interface(interface) = resolved.decl else {
            panic!();
        };
        let bundle = synthesize_interface(&mut loader, &interface, &resolved.found_in);

        assert_eq!(
            field(&bundle.value, "author"),
            &MockValue::Object(vec![(
                "name".to_string(),
                MockValue::String("Mock name".to_string())
            )])
        );
    }

    #[test]
    fn test_react_node_marker_is_null() {
        let bundle = synthesize_fixture("interface Props { children: ReactNode; }", "Props");
        assert_eq!(field(&bundle.value, "children"), &MockValue::Null);
    }

    #[test]
    fn test_date_type_is_current_time_number() {
        let bundle = synthesize_fixture("interface Props { createdAt: Date; }", "Props");
        match field(&bundle.value, "createdAt") {
            MockValue::Number(ms) => assert!(*ms > 0.0),
            other => panic!("number expected, got {:?}", other),
        }
    }

    #[test]
    fn test_unresolved_named_type_falls_back_to_synthetic_field() {
        let bundle = synthesize_fixture("interface Props { payload: Mystery; }", "Props");

        assert_eq!(
            field(&bundle.value, "payload"),
            &MockValue::Object(vec![(
                "mockPayload".to_string(),
                MockValue::String("Mock payload".to_string())
            )])
        );
    }

    #[test]
    fn test_self_referential_type_terminates() {
        let bundle = synthesize_fixture(
            "interface TreeNode { label: string; parent: TreeNode; }",
            "TreeNode",
        );

        assert_eq!(
            field(&bundle.value, "label"),
            &MockValue::String("Mock label".to_string())
        );
        // Re-entry into a type already being synthesized yields null.
        assert_eq!(field(&bundle.value, "parent"), &MockValue::Null);
    }

    #[test]
    fn test_mutually_recursive_types_terminate() {
        let bundle = synthesize_fixture(
            "interface A { b: B; }\ninterface B { a: A; }\ninterface Props { root: A; }",
            "Props",
        );

        // A -> B -> A stops at the second A.
        assert_eq!(
            field(&bundle.value, "root"),
            &MockValue::Object(vec![(
                "b".to_string(),
                MockValue::Object(vec![("a".to_string(), MockValue::Null)])
            )])
        );
    }

    #[test]
    fn test_optional_members_still_synthesized() {
        let bundle = synthesize_fixture("interface Props { caption?: string; }", "Props");
        assert_eq!(
            field(&bundle.value, "caption"),
            &MockValue::String("Mock caption".to_string())
        );
    }
}

//! Per-file usage and component scanning.
//!
//! One parsed file yields at most one `ComponentInfo` and any number of
//! `TranslationUsage` entries. Component selection is deliberately
//! order-sensitive: the first top-level declaration in source order whose
//! body contains a JSX construct wins, and later JSX-returning declarations
//! in the same file are ignored.
//!
//! Usage extraction recognizes exactly two shapes:
//! 1. a call whose callee is literally the identifier `t` with a
//!    string-literal first argument, and
//! 2. a `<FormattedMessage id="...">` element whose `id` attribute is a
//!    string literal (optionally wrapped in an expression container).
//!
//! Variable keys, template literals, and computed attributes are silently not
//! recorded.

use std::path::Path;

use swc_common::{BytePos, SourceMap};
use swc_ecma_ast::{
    Callee, Decl, DefaultDecl, Expr, JSXAttrName, JSXAttrOrSpread, JSXAttrValue, JSXElement,
    JSXElementName, JSXExpr, JSXFragment, Lit, ModuleDecl, ModuleItem, Pat, Stmt, TsEntityName,
    TsType, VarDeclarator,
};
use swc_ecma_visit::{Visit, VisitWith};

use crate::core::parsers::tsx::ParsedSource;
use crate::core::snapshot::{ComponentInfo, TranslationUsage};

/// Scan result for a single file.
#[derive(Debug)]
pub struct FileScan {
    pub component: Option<ComponentInfo>,
    pub usages: Vec<TranslationUsage>,
}

/// Scan one parsed file for its component declaration and localization-key
/// usages.
pub fn scan_file(file_path: &str, parsed: &ParsedSource) -> FileScan {
    let detected = detect_component(parsed);

    // Usages in files without a component (hooks, helpers) are still indexed;
    // they fall back to the file stem as the owning name.
    let component_name = detected
        .as_ref()
        .map(|c| c.name.clone())
        .unwrap_or_else(|| file_stem(file_path));

    let mut collector = UsageCollector {
        file_path,
        component_name: &component_name,
        source_map: &parsed.source_map,
        usages: Vec::new(),
    };
    parsed.module.visit_with(&mut collector);

    let component = detected.map(|c| ComponentInfo {
        path: file_path.to_string(),
        name: c.name,
        props_interface: c.props_interface,
        translation_keys: dedup_keys(&collector.usages),
    });

    FileScan {
        component,
        usages: collector.usages,
    }
}

fn file_stem(file_path: &str) -> String {
    Path::new(file_path)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| file_path.to_string())
}

/// Deduplicate usage keys preserving first-seen order.
fn dedup_keys(usages: &[TranslationUsage]) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for usage in usages {
        if !keys.contains(&usage.key) {
            keys.push(usage.key.clone());
        }
    }
    keys
}

// ============================================================
// Component detection
// ============================================================

struct DetectedComponent {
    name: String,
    props_interface: Option<String>,
}

/// Walk top-level declarations in source order and pick the first one whose
/// body contains a JSX element, self-closing element, or fragment.
fn detect_component(parsed: &ParsedSource) -> Option<DetectedComponent> {
    for item in &parsed.module.body {
        let candidate = match item {
            ModuleItem::Stmt(Stmt::Decl(decl)) => component_from_decl(decl),
            ModuleItem::ModuleDecl(ModuleDecl::ExportDecl(export)) => {
                component_from_decl(&export.decl)
            }
            ModuleItem::ModuleDecl(ModuleDecl::ExportDefaultDecl(export)) => {
                if let DefaultDecl::Fn(fn_expr) = &export.decl {
                    if contains_jsx(&*fn_expr.function) {
                        let name = fn_expr
                            .ident
                            .as_ref()
                            .map(|i| i.sym.to_string())
                            .unwrap_or_else(|| "default".to_string());
                        let props_interface = fn_expr
                            .function
                            .params
                            .first()
                            .and_then(|p| props_interface_from_pat(&p.pat));
                        Some(DetectedComponent {
                            name,
                            props_interface,
                        })
                    } else {
                        None
                    }
                } else {
                    None
                }
            }
            _ => None,
        };

        if candidate.is_some() {
            return candidate;
        }
    }
    None
}

fn component_from_decl(decl: &Decl) -> Option<DetectedComponent> {
    match decl {
        Decl::Fn(fn_decl) => {
            if !contains_jsx(&*fn_decl.function) {
                return None;
            }
            let props_interface = fn_decl
                .function
                .params
                .first()
                .and_then(|p| props_interface_from_pat(&p.pat));
            Some(DetectedComponent {
                name: fn_decl.ident.sym.to_string(),
                props_interface,
            })
        }
        Decl::Var(var_decl) => var_decl.decls.iter().find_map(component_from_declarator),
        _ => None,
    }
}

/// `const Foo = (props) => <div/>` or `const Foo = function(props) {...}`.
fn component_from_declarator(decl: &VarDeclarator) -> Option<DetectedComponent> {
    let Pat::Ident(binding_ident) = &decl.name else {
        return None;
    };
    let init = decl.init.as_deref()?;

    let (has_jsx, first_param) = match init {
        Expr::Arrow(arrow) => (contains_jsx(arrow), arrow.params.first()),
        Expr::Fn(fn_expr) => (
            contains_jsx(&*fn_expr.function),
            fn_expr.function.params.first().map(|p| &p.pat),
        ),
        _ => return None,
    };

    if !has_jsx {
        return None;
    }

    Some(DetectedComponent {
        name: binding_ident.id.sym.to_string(),
        props_interface: first_param.and_then(props_interface_from_pat),
    })
}

/// Unrestricted recursive descent: does any JSX construct appear in the node?
fn contains_jsx<N: VisitWith<JsxProbe>>(node: &N) -> bool {
    let mut probe = JsxProbe { found: false };
    node.visit_with(&mut probe);
    probe.found
}

struct JsxProbe {
    found: bool,
}

impl Visit for JsxProbe {
    fn visit_jsx_element(&mut self, _node: &JSXElement) {
        self.found = true;
    }

    fn visit_jsx_fragment(&mut self, _node: &JSXFragment) {
        self.found = true;
    }
}

/// Extract the props interface name from a parameter pattern.
///
/// Only a direct named type reference counts; an inline object type or a
/// missing annotation yields `None`.
fn props_interface_from_pat(pat: &Pat) -> Option<String> {
    let type_ann = match pat {
        Pat::Ident(ident) => ident.type_ann.as_deref(),
        Pat::Object(obj) => obj.type_ann.as_deref(),
        Pat::Assign(assign) => return props_interface_from_pat(&assign.left),
        _ => None,
    }?;

    match &*type_ann.type_ann {
        TsType::TsTypeRef(type_ref) => match &type_ref.type_name {
            TsEntityName::Ident(ident) => Some(ident.sym.to_string()),
            TsEntityName::TsQualifiedName(_) => None,
        },
        _ => None,
    }
}

// ============================================================
// Usage extraction
// ============================================================

struct UsageCollector<'a> {
    file_path: &'a str,
    component_name: &'a str,
    source_map: &'a SourceMap,
    usages: Vec<TranslationUsage>,
}

impl UsageCollector<'_> {
    fn record(&mut self, key: &str, pos: BytePos) {
        let loc = self.source_map.lookup_char_pos(pos);
        self.usages.push(TranslationUsage {
            key: key.to_string(),
            component_path: self.file_path.to_string(),
            component_name: self.component_name.to_string(),
            line: loc.line,
            column: loc.col_display + 1,
        });
    }
}

impl Visit for UsageCollector<'_> {
    fn visit_call_expr(&mut self, node: &swc_ecma_ast::CallExpr) {
        if let Callee::Expr(expr) = &node.callee
            && let Expr::Ident(ident) = &**expr
            && ident.sym == "t"
            && let Some(arg) = node.args.first()
            && let Expr::Lit(Lit::Str(s)) = &*arg.expr
            && let Some(key) = s.value.as_str()
        {
            self.record(key, node.span.lo);
        }

        node.visit_children_with(self);
    }

    fn visit_jsx_element(&mut self, node: &JSXElement) {
        if let JSXElementName::Ident(name) = &node.opening.name
            && name.sym == "FormattedMessage"
            && let Some(key) = formatted_message_id(&node.opening.attrs)
        {
            self.record(&key, node.span.lo);
        }

        node.visit_children_with(self);
    }
}

/// Find the `id` attribute and extract its string value.
///
/// Accepts `id="key"` and `id={"key"}`; anything else (variable, template,
/// member access) is not a recordable usage.
fn formatted_message_id(attrs: &[JSXAttrOrSpread]) -> Option<String> {
    for attr in attrs {
        let JSXAttrOrSpread::JSXAttr(attr) = attr else {
            continue;
        };
        let JSXAttrName::Ident(name) = &attr.name else {
            continue;
        };
        if name.sym != "id" {
            continue;
        }

        return match &attr.value {
            Some(JSXAttrValue::Str(s)) => s.value.as_str().map(str::to_string),
            Some(JSXAttrValue::JSXExprContainer(container)) => {
                if let JSXExpr::Expr(expr) = &container.expr
                    && let Expr::Lit(Lit::Str(s)) = &**expr
                {
                    s.value.as_str().map(str::to_string)
                } else {
                    None
                }
            }
            _ => None,
        };
    }
    None
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;
    use swc_common::SourceMap;

    use super::*;
    use crate::core::parsers::tsx::parse_tsx_source;

    fn scan(code: &str) -> FileScan {
        let parsed = parse_tsx_source(
            code.to_string(),
            "./src/App.tsx",
            Arc::new(SourceMap::default()),
        )
        .unwrap();
        scan_file("./src/App.tsx", &parsed)
    }

    #[test]
    fn test_literal_t_call_records_position() {
        let scan = scan("export function App() {\n  return <div>{t(\"greeting\")}</div>;\n}\n");

        assert_eq!(scan.usages.len(), 1);
        let usage = &scan.usages[0];
        assert_eq!(usage.key, "greeting");
        assert_eq!(usage.line, 2);
        assert_eq!(usage.column, 16);
        assert_eq!(usage.component_name, "App");
        assert_eq!(usage.component_path, "./src/App.tsx");
    }

    #[test]
    fn test_variable_key_not_recorded() {
        let scan = scan("export function App() {\n  return <div>{t(someKey)}</div>;\n}\n");
        assert!(scan.usages.is_empty());
    }

    #[test]
    fn test_template_key_not_recorded() {
        let scan = scan("export function App() {\n  return <div>{t(`greeting.${x}`)}</div>;\n}\n");
        assert!(scan.usages.is_empty());
    }

    #[test]
    fn test_only_bare_t_identifier_matches() {
        let scan = scan("export function App() {\n  return <div>{i18n.t(\"greeting\")}</div>;\n}\n");
        assert!(scan.usages.is_empty());
    }

    #[test]
    fn test_formatted_message_literal_id() {
        let scan = scan(
            "export function App() {\n  return <FormattedMessage id=\"welcome.title\" />;\n}\n",
        );

        assert_eq!(scan.usages.len(), 1);
        assert_eq!(scan.usages[0].key, "welcome.title");
        assert_eq!(scan.usages[0].line, 2);
        assert_eq!(scan.usages[0].column, 10);
    }

    #[test]
    fn test_formatted_message_expression_container_id() {
        let scan = scan(
            "export function App() {\n  return <FormattedMessage id={\"welcome.body\"} />;\n}\n",
        );

        assert_eq!(scan.usages.len(), 1);
        assert_eq!(scan.usages[0].key, "welcome.body");
    }

    #[test]
    fn test_formatted_message_computed_id_not_recorded() {
        let scan =
            scan("export function App() {\n  return <FormattedMessage id={messageId} />;\n}\n");
        assert!(scan.usages.is_empty());
    }

    #[test]
    fn test_component_detection_function_declaration() {
        let scan = scan("export function Header() {\n  return <header />;\n}\n");

        let component = scan.component.unwrap();
        assert_eq!(component.name, "Header");
        assert_eq!(component.props_interface, None);
    }

    #[test]
    fn test_component_detection_arrow_variable() {
        let scan = scan("const Card = (props: CardProps) => <div>{props.title}</div>;\n");

        let component = scan.component.unwrap();
        assert_eq!(component.name, "Card");
        assert_eq!(component.props_interface, Some("CardProps".to_string()));
    }

    #[test]
    fn test_first_jsx_declaration_wins() {
        let scan = scan(
            "export function First() {\n  return <div>one</div>;\n}\nexport function Second() {\n  return <div>two</div>;\n}\n",
        );

        assert_eq!(scan.component.unwrap().name, "First");
    }

    #[test]
    fn test_non_jsx_declarations_are_skipped() {
        let scan = scan(
            "function helper(x: number) {\n  return x + 1;\n}\nexport function View() {\n  return <span />;\n}\n",
        );

        assert_eq!(scan.component.unwrap().name, "View");
    }

    #[test]
    fn test_fragment_counts_as_jsx() {
        let scan = scan("export function Wrapper() {\n  return <>text</>;\n}\n");
        assert_eq!(scan.component.unwrap().name, "Wrapper");
    }

    #[test]
    fn test_destructured_param_with_named_annotation() {
        let scan = scan("export function Panel({ title }: PanelProps) {\n  return <div />;\n}\n");
        assert_eq!(
            scan.component.unwrap().props_interface,
            Some("PanelProps".to_string())
        );
    }

    #[test]
    fn test_inline_object_annotation_yields_no_interface() {
        let scan =
            scan("export function Panel({ title }: { title: string }) {\n  return <div />;\n}\n");
        assert_eq!(scan.component.unwrap().props_interface, None);
    }

    #[test]
    fn test_default_export_function_component() {
        let scan = scan("export default function Page() {\n  return <main />;\n}\n");
        assert_eq!(scan.component.unwrap().name, "Page");
    }

    #[test]
    fn test_translation_keys_deduplicated_in_order() {
        let scan = scan(
            "export function App() {\n  return (\n    <div>\n      {t(\"b\")}\n      {t(\"a\")}\n      {t(\"b\")}\n    </div>\n  );\n}\n",
        );

        let component = scan.component.unwrap();
        assert_eq!(component.translation_keys, vec!["b", "a"]);
        assert_eq!(scan.usages.len(), 3);
    }

    #[test]
    fn test_usages_without_component_use_file_stem() {
        let scan = scan("export function useGreeting() {\n  return t(\"greeting\");\n}\n");

        assert!(scan.component.is_none());
        assert_eq!(scan.usages.len(), 1);
        assert_eq!(scan.usages[0].component_name, "App");
    }
}

//! Cross-file type resolution.
//!
//! Given a type name and the file it was referenced from, locate the
//! interface or enum declaration. Search order:
//!
//! 1. declarations of that name anywhere in the referencing file,
//! 2. a named import binding that name, whose relative module specifier is
//!    resolved by trying the literal path and then each known extension
//!    suffix, loading the first path that exists.
//!
//! A second import hop is not followed, and package (non-relative) imports
//! are not resolved. "Not found" is a normal outcome, never an error.

use std::path::{Path, PathBuf};

use swc_ecma_ast::{
    Decl, ImportSpecifier, Module, ModuleDecl, ModuleItem, Stmt, TsEnumDecl, TsInterfaceDecl,
};

use crate::core::loader::SourceLoader;

/// A located interface or enum declaration.
#[derive(Debug, Clone)]
pub enum TypeDecl {
    Interface(TsInterfaceDecl),
    Enum(TsEnumDecl),
}

/// Resolution result: the declaration plus the file it was found in, which
/// becomes the context for resolving any type names it mentions.
#[derive(Debug, Clone)]
pub struct ResolvedType {
    pub decl: TypeDecl,
    pub found_in: PathBuf,
}

/// Resolve a type name starting from the file that referenced it.
pub fn resolve_type(
    loader: &mut SourceLoader,
    type_name: &str,
    from_file: &Path,
) -> Option<ResolvedType> {
    let parsed = loader.load(from_file).ok()?;

    if let Some(decl) = find_declaration(&parsed.module, type_name) {
        return Some(ResolvedType {
            decl,
            found_in: from_file.to_path_buf(),
        });
    }

    let specifier = find_import_specifier(&parsed.module, type_name)?;
    let target = resolve_import_path(from_file, &specifier)?;

    let imported = loader.load(&target).ok()?;
    let decl = find_declaration(&imported.module, type_name)?;

    Some(ResolvedType {
        decl,
        found_in: target,
    })
}

/// Find an interface or enum declaration by name in a module, including ones
/// wrapped in `export`.
fn find_declaration(module: &Module, type_name: &str) -> Option<TypeDecl> {
    for item in &module.body {
        let decl = match item {
            ModuleItem::Stmt(Stmt::Decl(decl)) => decl,
            ModuleItem::ModuleDecl(ModuleDecl::ExportDecl(export)) => &export.decl,
            _ => continue,
        };

        match decl {
            Decl::TsInterface(interface) if interface.id.sym == type_name => {
                return Some(TypeDecl::Interface((**interface).clone()));
            }
            Decl::TsEnum(enum_decl) if enum_decl.id.sym == type_name => {
                return Some(TypeDecl::Enum((**enum_decl).clone()));
            }
            _ => {}
        }
    }
    None
}

/// Find the module specifier of a named import binding `type_name`.
///
/// Matches on the local binding, so `import { Props as CardProps }` resolves
/// `CardProps`. Default and namespace imports are not followed.
fn find_import_specifier(module: &Module, type_name: &str) -> Option<String> {
    for item in &module.body {
        let ModuleItem::ModuleDecl(ModuleDecl::Import(import)) = item else {
            continue;
        };
        for specifier in &import.specifiers {
            if let ImportSpecifier::Named(named) = specifier
                && named.local.sym == type_name
            {
                return import.src.value.as_str().map(str::to_string);
            }
        }
    }
    None
}

/// Resolve a relative import specifier to a concrete path.
///
/// Tries, in fixed order, the literal path and then each extension suffix
/// appended to it, relative to the importing file's directory. The first
/// existing path wins.
fn resolve_import_path(from_file: &Path, specifier: &str) -> Option<PathBuf> {
    if !specifier.starts_with('.') {
        return None;
    }

    let base_dir = from_file.parent()?;
    let normalized = specifier.strip_prefix("./").unwrap_or(specifier);
    let joined = base_dir.join(normalized);

    if joined.is_file() {
        return Some(joined);
    }

    for ext in &["ts", "tsx", "js", "jsx"] {
        let candidate = PathBuf::from(format!("{}.{}", joined.display(), ext));
        if candidate.is_file() {
            return Some(candidate);
        }
    }

    None
}

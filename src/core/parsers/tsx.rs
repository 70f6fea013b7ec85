use std::sync::Arc;

use anyhow::{Result, anyhow};
use swc_common::{FileName, Globals, SourceMap};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

/// A parsed TSX/TS source file.
///
/// Owns the swc module together with the source map needed to turn byte
/// positions back into 1-indexed line/column pairs. Created once per file and
/// never mutated; a file-change notification replaces the whole entry via
/// `SourceLoader::invalidate`.
pub struct ParsedSource {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
}

/// Parse TSX/TS source code into an AST.
///
/// Parsing is permissive: recoverable syntax errors in unrelated constructs
/// are drained and discarded so that valid surrounding code still produces a
/// usable module. Only a hard parse failure returns an error, which callers
/// convert into a skip for that file.
pub fn parse_tsx_source(
    code: String,
    file_path: &str,
    source_map: Arc<SourceMap>,
) -> Result<ParsedSource> {
    use swc_common::GLOBALS;

    GLOBALS.set(&Globals::new(), || {
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let syntax = Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        });

        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);

        let module = parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse {}: {:?}", file_path, e))?;

        // Recoverable errors are tolerated; the module is still usable.
        let _ = parser.take_errors();

        Ok(ParsedSource { module, source_map })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(code: &str) -> ParsedSource {
        parse_tsx_source(
            code.to_string(),
            "test.tsx",
            Arc::new(SourceMap::default()),
        )
        .unwrap()
    }

    #[test]
    fn test_parse_component_with_jsx() {
        let parsed = parse("export function App() { return <div>hello</div>; }");
        assert_eq!(parsed.module.body.len(), 1);
    }

    #[test]
    fn test_parse_interface() {
        let parsed = parse("interface Props { name: string; }");
        assert_eq!(parsed.module.body.len(), 1);
    }

    #[test]
    fn test_parse_rejects_hard_errors() {
        let result = parse_tsx_source(
            "function {{{".to_string(),
            "broken.tsx",
            Arc::new(SourceMap::default()),
        );
        assert!(result.is_err());
    }
}

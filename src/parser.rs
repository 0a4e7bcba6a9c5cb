//! Parser: translates the token stream into an [`Ast`].
//!
//! There is no grammar beyond concatenation — each token maps 1:1 to a node
//! in order. Lexer errors propagate unchanged.

use crate::ast::{Ast, ClassNode, Node};
use crate::lexer::{Lexer, PatternError};
use crate::token::Token;

/// Compile a pattern string into an [`Ast`].
pub fn parse(pattern: &str) -> Result<Ast, PatternError> {
    let mut nodes = Vec::new();
    for token in Lexer::new(pattern) {
        nodes.push(token_to_node(token?));
    }
    Ok(Ast::new(nodes))
}

fn token_to_node(token: Token) -> Node {
    match token {
        Token::Literal(ch) => Node::Literal(ch),
        Token::Class(class) => Node::Class(ClassNode {
            kind: class.kind,
            negated: class.negated,
            min: class.length.min,
            max: class.length.max,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::ClassKind;

    fn parse_ok(pattern: &str) -> Ast {
        parse(pattern).expect("parse should succeed")
    }

    #[test]
    fn empty_pattern_is_empty_ast() {
        let ast = parse_ok("");
        assert!(ast.is_empty());
    }

    #[test]
    fn nodes_mirror_token_order() {
        let ast = parse_ok("[dec::3]-[dec::4]");
        assert_eq!(ast.len(), 3);
        assert!(matches!(ast.nodes()[0], Node::Class(_)));
        assert_eq!(ast.nodes()[1], Node::Literal('-'));
        assert!(matches!(ast.nodes()[2], Node::Class(_)));
    }

    #[test]
    fn length_bounds_are_lifted_onto_the_node() {
        let ast = parse_ok("[str::>=2<=4]");
        let Node::Class(class) = &ast.nodes()[0] else {
            panic!("expected class node");
        };
        assert_eq!(class.min, 2);
        assert_eq!(class.max, Some(4));
        assert!(!class.negated);
        assert!(matches!(class.kind, ClassKind::Set(_)));
    }

    #[test]
    fn lexer_errors_propagate() {
        assert_eq!(parse("[str::").unwrap_err(), PatternError::UnclosedBracket);
        assert!(matches!(
            parse("[nope::]").unwrap_err(),
            PatternError::InvalidType(_)
        ));
    }

    #[test]
    fn compiling_twice_is_deterministic() {
        let pattern = "[anum:z-aA-Z0|1:>=2<=9]x[str:`b`|`c:3]";
        assert_eq!(parse_ok(pattern), parse_ok(pattern));
    }
}

use std::collections::HashMap;

use crate::lex::token::{ TokenKind, KeywordKind };

pub const KEYWORD_KIND_LIST: &[KeywordKind] = &[
    KeywordKind::VOID,
];

pub struct KeywordMatcher {
    start_node: MatcherNode,
}

#[derive(Default)]
struct MatcherNode {
    children: HashMap<char, MatcherNode>,
    kind: Option<TokenKind>,
}

impl KeywordMatcher {
    pub fn new() -> Self {
        let mut start_node = MatcherNode::default();

        for keyword in KEYWORD_KIND_LIST {
            let mut node = &mut start_node;
            for c in keyword.spelling().chars() {
                node = node.children.entry(c).or_default();
            }

            node.kind = Some(TokenKind::from(*keyword));
        }

        KeywordMatcher { start_node }
    }

    pub fn search_str(&self, s: &str) -> Option<TokenKind> {
        let mut curr = &self.start_node;

        for c in s.chars() {
            if let Some(node) = curr.children.get(&c) {
                curr = node;
            }
            else {
                return None;
            }
        }

        curr.kind
    }
}

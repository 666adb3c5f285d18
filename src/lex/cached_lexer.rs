use std::collections::VecDeque;

use crate::error::ParseError;
use crate::lex::lexer::Lexer;
use crate::lex::token::Token;

pub struct CachedLexer<'s> {
    lexer: Lexer<'s>,
    cache: VecDeque<Token<'s>>,
}

impl<'s> CachedLexer<'s> {
    pub fn new(input: &'s str) -> Self {
        CachedLexer {
            lexer: Lexer::new(input),
            cache: VecDeque::new(),
        }
    }

    pub fn input(&self) -> &'s str {
        self.lexer.input()
    }

    pub fn ncached(&self) -> usize {
        self.cache.len()
    }

    pub fn lex(&mut self) -> Result<Token<'s>, ParseError> {
        if let Some(token) = self.cache.pop_front() {
            Ok(token)
        }
        else {
            self.lexer.lex()
        }
    }

    pub fn peek(&mut self) -> Result<&Token<'s>, ParseError> {
        if self.cache.is_empty() {
            let token = self.lexer.lex()?;
            self.cache.push_back(token);
        }

        Ok(&self.cache[0])
    }

    pub fn peekn(&mut self, n: usize) -> Result<&Token<'s>, ParseError> {
        while self.cache.len() <= n {
            let token = self.lexer.lex()?;
            self.cache.push_back(token);
        }

        Ok(&self.cache[n])
    }
}

use std::cmp::{ max, min };

use crate::error::ParseError;
use crate::lex::token::{ Token, TokenKind };
use crate::lex::keyword::KeywordMatcher;

pub struct Lexer<'s> {
    input: &'s str,
    pos: LexState<'s>,
    keyword_matcher: KeywordMatcher,
}

impl<'s> Lexer<'s> {
    pub fn new(input: &'s str) -> Self {
        Lexer {
            input,
            pos: LexState::new(input, 0),
            keyword_matcher: KeywordMatcher::new(),
        }
    }

    pub fn input(&self) -> &'s str {
        self.input
    }

    fn unrecognized(&mut self, start: LexState<'s>) -> ParseError {
        // leave the cursor on the offending character so a retry
        // reports the same error instead of skipping past it
        self.pos = start;
        ParseError::syntax("a valid token", &self.input[start.offset()..])
    }

    pub fn lex(&mut self) -> Result<Token<'s>, ParseError> {
        // we make sure curr is the first character of the next token
        // and pos is pointing to the next character after curr
        let mut curr: char;
        let start: LexState<'s>;
        loop {
            // once the input runs out the lexer keeps handing out EOF,
            // the parser stops on the first one it peeks
            let Some(c) = self.pos.get() else {
                return Ok(Token::new(TokenKind::EOF, "", self.input.len()));
            };

            curr = c;
            if !curr.is_whitespace() {
                start = self.pos.pre_inc();
                break;
            }

            // skips the current whitespace character
            self.pos.inc();
        }

        match curr {
            '0'..='9' => {
                loop {
                    if let Some(next) = self.pos.get() {
                        if next.is_ascii_digit() {
                            self.pos.inc();
                            continue;
                        }
                    }

                    // either the next character is not a digit => end of the number
                    // or EOF reached, which ends the token as well
                    return Ok(start.form_token(&self.pos, TokenKind::INT));
                }
            }

            'a'..='z' | 'A'..='Z' | '_' => {
                loop {
                    if let Some(next) = self.pos.get() {
                        if next.is_ascii_alphanumeric() || next == '_' {
                            self.pos.inc();
                            continue;
                        }
                    }

                    // same as above
                    let s = start.form_str(&self.pos);
                    let kind = self.keyword_matcher.search_str(s)
                        .unwrap_or(TokenKind::ID);

                    return Ok(start.form_token(&self.pos, kind));
                }
            }

            '+' => Ok(self.pos.form_token(&start, TokenKind::PLUS)),

            '-' => Ok(self.pos.form_token(&start, TokenKind::MINUS)),

            '*' => Ok(self.pos.form_token(&start, TokenKind::STAR)),

            '/' => Ok(self.pos.form_token(&start, TokenKind::SLASH)),

            '%' => Ok(self.pos.form_token(&start, TokenKind::PERCENT)),

            '(' => Ok(self.pos.form_token(&start, TokenKind::LPAREN)),

            ')' => Ok(self.pos.form_token(&start, TokenKind::RPAREN)),

            ';' => Ok(self.pos.form_token(&start, TokenKind::SEMI)),

            '&' => {
                if self.pos.get() == Some('&') {
                    self.pos.inc();
                    Ok(self.pos.form_token(&start, TokenKind::ANDAND))
                }
                else {
                    Ok(self.pos.form_token(&start, TokenKind::AMP))
                }
            }

            '|' => {
                if self.pos.get() == Some('|') {
                    self.pos.inc();
                    Ok(self.pos.form_token(&start, TokenKind::OROR))
                }
                else {
                    // a lone '|' is not a token of the language
                    Err(self.unrecognized(start))
                }
            }

            '!' => {
                if self.pos.get() == Some('=') {
                    self.pos.inc();
                    Ok(self.pos.form_token(&start, TokenKind::NE))
                }
                else {
                    Ok(self.pos.form_token(&start, TokenKind::NOT))
                }
            }

            '=' => {
                if self.pos.get() == Some('=') {
                    self.pos.inc();
                    Ok(self.pos.form_token(&start, TokenKind::EQEQ))
                }
                else {
                    // no assignment in the grammar, '=' only pairs up as '=='
                    Err(self.unrecognized(start))
                }
            }

            '<' => {
                match self.pos.get() {
                    Some('<') => {
                        self.pos.inc();
                        Ok(self.pos.form_token(&start, TokenKind::SHL))
                    }

                    Some('=') => {
                        self.pos.inc();
                        Ok(self.pos.form_token(&start, TokenKind::LE))
                    }

                    _ => Ok(self.pos.form_token(&start, TokenKind::LT)),
                }
            }

            '>' => {
                match self.pos.get() {
                    Some('>') => {
                        self.pos.inc();
                        Ok(self.pos.form_token(&start, TokenKind::SHR))
                    }

                    Some('=') => {
                        self.pos.inc();
                        Ok(self.pos.form_token(&start, TokenKind::GE))
                    }

                    _ => Ok(self.pos.form_token(&start, TokenKind::GT)),
                }
            }

            _ => Err(self.unrecognized(start)),
        }
    }
}

#[derive(Copy, Clone)]
struct LexState<'s> {
    input: &'s str,
    current: usize,
}

impl<'s> LexState<'s> {
    fn new(input: &'s str, pos: usize) -> Self {
        LexState { input, current: pos }
    }

    fn offset(&self) -> usize {
        self.current
    }

    fn get(&self) -> Option<char> {
        self.input[self.current..].chars().next()
    }

    fn pre_inc(&mut self) -> Self {
        let pre = *self;

        self.inc();

        pre
    }

    fn inc(&mut self) -> &mut Self {
        if let Some(c) = self.get() {
            self.current += c.len_utf8();
        }

        self
    }

    fn form_str(&self, other: &Self) -> &'s str {
        let left = min(self.current, other.current);
        let right = max(self.current, other.current);

        &self.input[left..right]
    }

    fn form_token(&self, other: &Self, kind: TokenKind) -> Token<'s> {
        Token::new(kind, self.form_str(other), min(self.current, other.current))
    }
}

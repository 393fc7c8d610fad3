use crate::error::{GrammarError, Position, Result, TypeSyntaxError};
use crate::model::{
    PythonConstant, PythonFunctionParameter, PythonFunctionSignature, PythonTypeSpec,
};
use crate::sig::lexer::{Lexer, Token, TokenKind};

/// Cheap prefix filter deciding whether a line is worth tokenizing.
pub fn is_function_signature(line: &str) -> bool {
    line.starts_with("def ") || line.starts_with("async def")
}

/// Parse every valid signature line in a multi-line input.
///
/// Lines that fail to tokenize or parse are skipped; a bad line never
/// aborts the rest of the input, and no partial signature is returned.
pub fn parse_signatures(input: &str) -> Vec<PythonFunctionSignature> {
    input
        .lines()
        .filter(|line| is_function_signature(line))
        .filter_map(|line| match Parser::parse_str(line) {
            Ok(signature) => Some(signature),
            Err(err) => {
                log::debug!("skipping line {:?}: {}", line, err);
                None
            }
        })
        .collect()
}

/// First valid signature line in a multi-line input, if any.
pub fn find_signature(input: &str) -> Option<PythonFunctionSignature> {
    input
        .lines()
        .filter(|line| is_function_signature(line))
        .find_map(|line| Parser::parse_str(line).ok())
}

pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

impl Parser {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        // The cursor relies on a trailing Eof token; tolerate token
        // sequences built without one.
        if !matches!(tokens.last(), Some(token) if token.kind == TokenKind::Eof) {
            let pos = tokens.last().map_or_else(|| Position::new(0, 1, 1), |token| token.pos);
            tokens.push(Token { kind: TokenKind::Eof, lexeme: String::new(), pos });
        }

        Self { tokens, current: 0 }
    }

    pub fn parse_str(input: &str) -> Result<PythonFunctionSignature> {
        let mut lexer = Lexer::new(input);
        let tokens = lexer.tokenize()?;
        let mut parser = Parser::new(tokens);
        parser.parse_signature()
    }

    /// `('def' | 'async def') name '(' parameters ')' ('->' type)? ':'`
    ///
    /// Tokens after the closing ':' (a same-line stub body, say) are left
    /// unconsumed.
    pub fn parse_signature(&mut self) -> Result<PythonFunctionSignature> {
        let kind = self.current().kind.clone();
        let is_async = match kind {
            TokenKind::Def => {
                self.advance();
                false
            }
            TokenKind::AsyncDef => {
                self.advance();
                true
            }
            _ => return Err(self.expected("'def' or 'async def'")),
        };

        let name = self.expect_ident()?;
        let parameters = self.parse_parameter_list()?;

        let return_type = if self.check(&TokenKind::Arrow) {
            self.advance();
            Some(self.parse_type()?)
        } else {
            None
        };

        self.expect(&TokenKind::Colon, "':'")?;

        Ok(PythonFunctionSignature { name, parameters, return_type, is_async })
    }

    /// `'(' (parameter (',' parameter)*)? ')'`
    pub fn parse_parameter_list(&mut self) -> Result<Vec<PythonFunctionParameter>> {
        self.expect(&TokenKind::LParen, "'('")?;

        let mut parameters = Vec::new();

        if self.check(&TokenKind::RParen) {
            self.advance();
            return Ok(parameters);
        }

        loop {
            parameters.push(self.parse_parameter()?);

            if self.check(&TokenKind::Comma) {
                self.advance();
            } else {
                break;
            }
        }

        self.expect(&TokenKind::RParen, "')'")?;

        Ok(parameters)
    }

    /// `('*' | '**')? name (':' type)? ('=' literal)?`
    pub fn parse_parameter(&mut self) -> Result<PythonFunctionParameter> {
        let kind = self.current().kind.clone();
        let (is_star, is_double_star) = match kind {
            TokenKind::Star => {
                self.advance();
                (true, false)
            }
            TokenKind::StarStar => {
                self.advance();
                (false, true)
            }
            _ => (false, false),
        };

        let name = self.expect_ident()?;

        let ty = if self.check(&TokenKind::Colon) {
            self.advance();
            Some(self.parse_type()?)
        } else {
            None
        };

        let default = if self.check(&TokenKind::Equals) {
            self.advance();
            let constant = PythonConstant::from_token(self.current())?;
            self.advance();
            Some(constant)
        } else {
            None
        };

        let mut parameter = PythonFunctionParameter { name, ty, default, is_star, is_double_star };
        parameter.normalize_variadic();

        Ok(parameter)
    }

    /// `name ('[' type (',' type)* ']')?`, fully recursive.
    ///
    /// Consumes exactly the tokens of one type expression, leaving the
    /// cursor after the matching ']' (or after the bare name).
    pub fn parse_type(&mut self) -> std::result::Result<PythonTypeSpec, TypeSyntaxError> {
        let token = self.current().clone();

        let name = match token.kind {
            TokenKind::Ident => {
                self.advance();
                token.lexeme
            }
            // "-> None:" is common enough that the keyword doubles as a
            // type name
            TokenKind::NoneLiteral => {
                self.advance();
                "None".to_string()
            }
            _ => {
                return Err(TypeSyntaxError::ExpectedTypeName {
                    found: token.kind.to_string(),
                    pos: token.pos,
                })
            }
        };

        if !self.check(&TokenKind::LBracket) {
            return Ok(PythonTypeSpec::new(name));
        }

        let open_pos = self.current().pos;
        self.advance(); // Skip '['

        if self.check(&TokenKind::RBracket) {
            return Err(TypeSyntaxError::EmptyArguments { pos: open_pos });
        }

        let mut arguments = vec![self.parse_type()?];

        while self.check(&TokenKind::Comma) {
            self.advance();
            arguments.push(self.parse_type()?);
        }

        if !self.check(&TokenKind::RBracket) {
            return Err(TypeSyntaxError::UnmatchedBracket { pos: open_pos });
        }
        self.advance(); // Skip ']'

        Ok(PythonTypeSpec::generic(name, arguments))
    }

    fn current(&self) -> &Token {
        &self.tokens[self.current]
    }

    fn check(&self, kind: &TokenKind) -> bool {
        &self.current().kind == kind
    }

    fn advance(&mut self) {
        // Never moves past the trailing Eof, so current() stays valid
        if self.current().kind != TokenKind::Eof {
            self.current += 1;
        }
    }

    fn expect(&mut self, kind: &TokenKind, expected: &str) -> Result<Token> {
        if self.check(kind) {
            let token = self.current().clone();
            self.advance();
            Ok(token)
        } else {
            Err(self.expected(expected))
        }
    }

    fn expect_ident(&mut self) -> Result<String> {
        let token = self.current().clone();
        match token.kind {
            TokenKind::Ident => {
                self.advance();
                Ok(token.lexeme)
            }
            _ => Err(self.expected("an identifier")),
        }
    }

    fn expected(&self, expected: &str) -> GrammarError {
        let token = self.current();
        GrammarError::Expected {
            expected: expected.to_string(),
            found: token.kind.to_string(),
            pos: token.pos,
        }
    }
}

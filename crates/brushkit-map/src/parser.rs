//! Parser for Valve220 face records and brush blocks.

use brushkit_brush::{Brush, Face, TextureProjection};
use brushkit_geom::Plane;
use brushkit_math::{Point3, Vec3};

use crate::error::{MapError, Result};
use crate::lexer::{Lexer, Position, SpannedToken, Token};

/// Parse one face record:
///
/// ```text
/// ( x y z ) ( x y z ) ( x y z ) NAME [ ux uy uz uoff ] [ vx vy vz voff ] rot uscale vscale
/// ```
pub fn parse_face(line: &str) -> Result<Face> {
    let mut parser = Parser::new(line)?;
    let face = parser.face()?;
    parser.expect_end()?;
    Ok(face)
}

/// Parse one brush block: `{`, four or more face records, `}`.
///
/// Face ids are assigned in record order starting from 0 and the vertices
/// are enumerated.
pub fn parse_brush(text: &str) -> Result<Brush> {
    let mut parser = Parser::new(text)?;
    let start = parser.line();
    parser.expect_token(&Token::LBrace)?;
    let mut faces = Vec::new();
    while !parser.check_token(&Token::RBrace) {
        faces.push(parser.face()?);
    }
    parser.expect_token(&Token::RBrace)?;
    parser.expect_end()?;

    let mut brush = Brush::new(faces)?;
    tracing::debug!(
        line = start,
        faces = brush.face_count(),
        vertices = brush.vertices().len(),
        "parsed brush"
    );
    Ok(brush)
}

struct Parser {
    tokens: Vec<SpannedToken>,
    pos: usize,
    end: Position,
}

impl Parser {
    fn new(input: &str) -> Result<Self> {
        let mut lexer = Lexer::new(input);
        let tokens = lexer.tokenize()?;
        Ok(Self {
            tokens,
            pos: 0,
            end: lexer.position(),
        })
    }

    fn face(&mut self) -> Result<Face> {
        let p1 = self.point()?;
        let p2 = self.point()?;
        let p3 = self.point()?;
        let name = self.texture_name()?;
        let (u_axis, u_offset) = self.axis()?;
        let (v_axis, v_offset) = self.axis()?;
        let rotation = self.number("rotation")?;
        let u_scale = self.number("u scale")?;
        let v_scale = self.number("v scale")?;

        Ok(Face::new(
            Plane::new(p1, p2, p3),
            TextureProjection::new(
                &name, u_axis, u_offset, v_axis, v_offset, rotation, u_scale, v_scale,
            ),
        ))
    }

    fn point(&mut self) -> Result<Point3> {
        self.expect_token(&Token::LParen)?;
        let v = self.triple("point coordinate")?;
        self.expect_token(&Token::RParen)?;
        Ok(Point3::from(v))
    }

    fn axis(&mut self) -> Result<(Vec3, f64)> {
        self.expect_token(&Token::LBracket)?;
        let axis = self.triple("texture axis")?;
        let offset = self.number("texture offset")?;
        self.expect_token(&Token::RBracket)?;
        Ok((axis, offset))
    }

    fn triple(&mut self, what: &str) -> Result<Vec3> {
        Ok(Vec3::new(
            self.number(what)?,
            self.number(what)?,
            self.number(what)?,
        ))
    }

    fn texture_name(&mut self) -> Result<String> {
        match self.advance() {
            Some(SpannedToken {
                token: Token::Word(name),
                ..
            }) => Ok(name),
            other => Err(self.unexpected("texture name", other)),
        }
    }

    fn number(&mut self, what: &str) -> Result<f64> {
        match self.advance() {
            Some(SpannedToken {
                token: Token::Word(word),
                pos,
            }) => match word.parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(v),
                _ => Err(MapError::parser(
                    pos.line,
                    format!("invalid {what}: '{word}'"),
                )),
            },
            other => Err(self.unexpected(what, other)),
        }
    }

    fn unexpected(&self, expected: &str, actual: Option<SpannedToken>) -> MapError {
        match actual {
            Some(tok) => MapError::parser(
                tok.pos.line,
                format!("expected {expected}, got {:?}", tok.token),
            ),
            None => MapError::parser(
                self.end.line,
                format!("expected {expected}, got end of input"),
            ),
        }
    }

    fn line(&self) -> usize {
        self.peek().map_or(self.end.line, |t| t.pos.line)
    }

    fn peek(&self) -> Option<&SpannedToken> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<SpannedToken> {
        let tok = self.tokens.get(self.pos).cloned();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn check_token(&self, expected: &Token) -> bool {
        self.peek().is_some_and(|t| &t.token == expected)
    }

    fn expect_token(&mut self, expected: &Token) -> Result<()> {
        if self.check_token(expected) {
            self.advance();
            Ok(())
        } else {
            let actual = self.peek().cloned();
            Err(self.unexpected(&format!("{expected:?}"), actual))
        }
    }

    fn expect_end(&self) -> Result<()> {
        match self.peek() {
            None => Ok(()),
            Some(tok) => Err(MapError::parser(
                tok.pos.line,
                format!("unexpected trailing {:?}", tok.token),
            )),
        }
    }
}

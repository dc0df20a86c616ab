use super::{check_groups, CompileOptions, CompiledPattern, Compiler, Key, Pattern};
use crate::error::CompileError;

const SLASH: char = '/';
const COLON: char = ':';
const STAR: char = '*';
const DOT: char = '.';

/// Compiles Express-style path patterns.
///
/// - `:name` captures one non-empty segment, `:name(re)` uses a custom
///   expression and a trailing `?` makes the parameter optional;
/// - a `/` or `.` right before `:name` belongs to the parameter;
/// - `*` captures anything, `(re)` is an unnamed capture;
/// - `\c` is the literal `c`, everything else is literal text.
#[derive(Debug, Default, Clone, Copy)]
pub struct PathCompiler;

impl Compiler for PathCompiler {
    fn compile(
        &self,
        pattern: &Pattern,
        options: &CompileOptions,
    ) -> Result<(CompiledPattern, Vec<Key>), CompileError> {
        let mut keys: Vec<Key> = Vec::new();

        let compiled = match pattern {
            Pattern::Path(path) => {
                let source = translate(path, &mut keys, &mut 0, options)?;
                CompiledPattern::new(source, !options.case_sensitive)?
            }
            Pattern::List(paths) => {
                let mut index = 0;
                let mut alts: Vec<String> = Vec::with_capacity(paths.len());
                for path in paths {
                    let source = translate(path, &mut keys, &mut index, options)?;
                    alts.push(format!("(?:{})", source));
                }
                if alts.is_empty() {
                    return Err(CompileError::syntax("", "pattern list can not be empty"));
                }
                CompiledPattern::new(alts.join("|"), !options.case_sensitive)?
            }
            Pattern::Regex(regex) => {
                let mut index = 0;
                for name in regex.capture_names().skip(1) {
                    keys.push(match name {
                        Some(name) => Key::Name(name.into()),
                        None => {
                            index += 1;
                            Key::Index(index - 1)
                        }
                    });
                }
                CompiledPattern::from_regex(regex.clone())
            }
        };

        check_groups(&compiled, &keys)?;
        Ok((compiled, keys))
    }
}

fn translate(
    path: &str,
    keys: &mut Vec<Key>,
    index: &mut usize,
    options: &CompileOptions,
) -> Result<String, CompileError> {
    let mut parser = Parser {
        path,
        pos: 0,
        out: String::with_capacity(path.len() * 2 + 16),
        keys,
        index,
    };
    parser.run()?;

    let mut out = parser.out;

    if !options.strict {
        if out.ends_with(SLASH) {
            out.push('?');
        } else {
            out.push_str("/?");
        }
    }

    if options.end {
        out.push('$');
    } else if !out.ends_with(SLASH) {
        out.push_str(if options.lookahead {
            "(?=/|$)"
        } else {
            "(?:/|$)"
        });
    }

    Ok(format!("^{}", out))
}

struct Parser<'a> {
    path: &'a str,
    pos: usize,
    out: String,
    keys: &'a mut Vec<Key>,
    index: &'a mut usize,
}

impl<'a> Parser<'a> {
    fn rest(&self) -> &str {
        &self.path[self.pos..]
    }

    fn run(&mut self) -> Result<(), CompileError> {
        while let Some(c) = self.rest().chars().next() {
            match c {
                '\\' => {
                    self.pos += 1;
                    match self.rest().chars().next() {
                        Some(e) => {
                            self.pos += e.len_utf8();
                            push_literal(&mut self.out, e);
                        }
                        None => return Err(self.error("trailing escape")),
                    }
                }
                STAR => {
                    self.pos += 1;
                    self.push_positional();
                    self.out.push_str("(.*)");
                }
                '(' => {
                    let inner = self.take_group()?;
                    self.push_positional();
                    self.out.push('(');
                    self.out.push_str(inner);
                    self.out.push(')');
                }
                ')' => return Err(self.error("unbalanced parenthesis")),
                SLASH | DOT | COLON if self.at_param() => self.param()?,
                _ => {
                    self.pos += c.len_utf8();
                    push_literal(&mut self.out, c);
                }
            }
        }
        Ok(())
    }

    /// `:name`, `/:name`, `.:name` or `/.:name` at the cursor.
    fn at_param(&self) -> bool {
        let rest = self.rest();
        let rest = rest.strip_prefix(SLASH).unwrap_or(rest);
        let rest = rest.strip_prefix(DOT).unwrap_or(rest);
        match rest.strip_prefix(COLON) {
            Some(name) => name.starts_with(is_name_char),
            None => false,
        }
    }

    fn param(&mut self) -> Result<(), CompileError> {
        let slash = self.eat(SLASH);
        let format = self.eat(DOT);
        if !self.eat(COLON) {
            return Err(self.error("expected parameter"));
        }

        let start = self.pos;
        let len = self.rest().find(|c| !is_name_char(c)).unwrap_or(self.rest().len());
        self.pos += len;
        let name: Box<str> = self.path[start..self.pos].into();

        let capture = if self.rest().starts_with('(') {
            self.take_group()?
        } else if format {
            "[^/.]+?"
        } else {
            "[^/]+?"
        };
        let optional = self.eat('?');

        self.keys.push(Key::Name(name));
        self.out.push_str("(?:");
        if format {
            self.out.push_str("\\.");
        }
        if slash {
            self.out.push(SLASH);
        }
        self.out.push('(');
        self.out.push_str(capture);
        self.out.push_str("))");
        if optional {
            self.out.push('?');
        }
        Ok(())
    }

    /// Consumes a parenthesized expression and returns its inner text.
    fn take_group(&mut self) -> Result<&'a str, CompileError> {
        let path = self.path;
        let start = self.pos + 1;
        let mut depth: usize = 0;
        let mut escaped = false;

        for (i, c) in path[self.pos..].char_indices() {
            if escaped {
                escaped = false;
                continue;
            }
            match c {
                '\\' => escaped = true,
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        let end = self.pos + i;
                        self.pos = end + 1;
                        if end == start {
                            return Err(self.error("capture group can not be empty"));
                        }
                        return Ok(&path[start..end]);
                    }
                }
                _ => {}
            }
        }
        Err(self.error("unbalanced parenthesis"))
    }

    fn push_positional(&mut self) {
        self.keys.push(Key::Index(*self.index));
        *self.index += 1;
    }

    fn eat(&mut self, c: char) -> bool {
        if self.rest().starts_with(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    fn error(&self, msg: &'static str) -> CompileError {
        CompileError::syntax(self.path, msg)
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn push_literal(out: &mut String, c: char) {
    if matches!(
        c,
        '\\' | '.' | '+' | '*' | '?' | '(' | ')' | '|' | '[' | ']' | '{' | '}' | '^' | '$'
    ) {
        out.push('\\');
    }
    out.push(c);
}

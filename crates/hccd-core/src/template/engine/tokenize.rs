//! Tokenization for template engine
//!
//! Provides O(n) tokenization using a state machine.

/// Token classification
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
    /// `{{key}}`, `{{{key}}}` or `{{& key}}`
    Variable { key: String },

    /// `{{#key}}` or `{{^key}}`
    SectionStart { key: String, inverted: bool },

    /// `{{/key}}`
    SectionEnd { key: String },

    /// `{{! ... }}`
    Comment,

    /// A closed tag that is not valid syntax, such as `{{}}` or `{{{key}}`
    Malformed { message: String },
}

/// A single `{{...}}` tag with position and classification
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    /// Token classification
    pub kind: TokenKind,
    /// Absolute byte position of `{{` in template
    pub start: usize,
    /// Total length in bytes including the braces
    pub length: usize,
    /// Line number where the tag starts (for error messages)
    pub line: usize,
}

impl Token {
    /// Byte position just past the closing braces
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

/// Tokenization state machine (explicit for testability)
///
/// # State Transitions
///
/// ```text
/// Normal ──{───> SeenLBrace ──{───> InToken ──}───> SeenRBrace ──}───> [Yield Token] → Normal
///   │               │                  │                  │
///   │ (not {)       │ (not {)          │ (not })          │ (not })
///   └──────────────>└─────────────────>└─────────────────>└──────────> InToken
/// ```
///
/// A `{{` that never sees `}}` leaves the machine in `InToken` or
/// `SeenRBrace` at end of input; [`TokenStream::unclosed_tag_line`] reports it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ScanState {
    /// Normal text scanning
    Normal,

    /// Seen first `{`, checking for second `{`
    SeenLBrace {
        /// Position of the first `{` character
        pos: usize,
    },

    /// Inside `{{...}}`, scanning until `}}`
    InToken {
        /// Byte position of the opening `{{`
        start: usize,
        /// Byte position where token content starts (after `{{`)
        content_start: usize,
        /// Line of the opening `{{`
        line: usize,
    },

    /// Seen first `}` inside token, checking for second `}`
    SeenRBrace {
        /// Byte position of the opening `{{`
        start: usize,
        /// Byte position where token content starts (after `{{`)
        content_start: usize,
        /// Position of the first `}` character
        rbrace_pos: usize,
        /// Line of the opening `{{`
        line: usize,
    },
}

/// Iterator over tags in a template string
///
/// Each byte is processed at most twice (a rejected brace is re-examined in
/// the state it falls back to), so tokenization is O(n).
pub(crate) struct TokenStream<'a> {
    /// Zero-copy byte slice of template text
    bytes: &'a [u8],
    /// Current byte position
    pos: usize,
    /// State machine state
    state: ScanState,
    /// Current line number (for error messages)
    line: usize,
    /// Step count for runaway protection
    step_count: usize,
}

impl<'a> TokenStream<'a> {
    /// Create a new TokenStream from template text
    pub fn new(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
            pos: 0,
            state: ScanState::Normal,
            line: 1,
            step_count: 0,
        }
    }

    /// Line of a `{{` left open at end of input, once iteration has finished
    pub fn unclosed_tag_line(&self) -> Option<usize> {
        match self.state {
            ScanState::InToken { line, .. } | ScanState::SeenRBrace { line, .. } => Some(line),
            _ => None,
        }
    }

    /// Classify token content into TokenKind
    ///
    /// - `! text` → Comment
    /// - `# key` / `^ key` → SectionStart
    /// - `/ key` → SectionEnd
    /// - `& key`, `{key` (triple mustache) or `key` → Variable
    ///
    /// A tag without a key is Malformed.
    fn classify_content(content: &str) -> TokenKind {
        let trimmed = content.trim();

        if trimmed.starts_with('!') {
            return TokenKind::Comment;
        }

        let (rest, build): (&str, fn(String) -> TokenKind) =
            if let Some(rest) = trimmed.strip_prefix('#') {
                (rest, |key| TokenKind::SectionStart { key, inverted: false })
            } else if let Some(rest) = trimmed.strip_prefix('^') {
                (rest, |key| TokenKind::SectionStart { key, inverted: true })
            } else if let Some(rest) = trimmed.strip_prefix('/') {
                (rest, |key| TokenKind::SectionEnd { key })
            } else if let Some(rest) = trimmed
                .strip_prefix('&')
                .or_else(|| trimmed.strip_prefix('{'))
            {
                (rest, |key| TokenKind::Variable { key })
            } else {
                (trimmed, |key| TokenKind::Variable { key })
            };

        let key = rest.trim();
        if key.is_empty() {
            TokenKind::Malformed {
                message: format!("Empty tag '{{{{{}}}}}'", content),
            }
        } else {
            build(key.to_string())
        }
    }

    /// Check if we should continue iteration (guards for runaway and EOF)
    #[inline]
    fn should_continue(&mut self, max_steps: usize) -> bool {
        self.step_count += 1;
        self.step_count <= max_steps && self.pos < self.bytes.len()
    }

    /// Record step for O(n) performance verification in tests
    #[cfg(test)]
    #[inline]
    fn record_test_step() {
        test_counter::inc();
    }

    /// Process Normal state: scan for opening braces
    fn process_normal_state(&mut self, byte: u8) {
        if byte == b'{' {
            self.state = ScanState::SeenLBrace { pos: self.pos };
        } else if byte == b'\n' {
            self.line += 1;
        }
        self.pos += 1;
    }

    /// Process SeenLBrace state: check for second brace to start token
    ///
    /// Returns true if position was advanced, false if byte should be reprocessed
    fn process_seen_lbrace(&mut self, byte: u8, lbrace_pos: usize) -> bool {
        if byte == b'{' {
            self.state = ScanState::InToken {
                start: lbrace_pos,
                content_start: self.pos + 1,
                line: self.line,
            };
            self.pos += 1;
            true
        } else {
            // Just a single {, not a token
            self.state = ScanState::Normal;
            false
        }
    }

    /// Process InToken state: scan for closing braces
    fn process_in_token(&mut self, byte: u8, start: usize, content_start: usize, line: usize) {
        if byte == b'}' {
            self.state = ScanState::SeenRBrace {
                start,
                content_start,
                rbrace_pos: self.pos,
                line,
            };
        } else if byte == b'\n' {
            self.line += 1;
        }
        self.pos += 1;
    }

    /// Process SeenRBrace state: check for second brace to complete token
    ///
    /// Returns (Option<Token>, advanced)
    fn process_seen_rbrace(
        &mut self,
        byte: u8,
        start: usize,
        content_start: usize,
        rbrace_pos: usize,
        line: usize,
    ) -> (Option<Token>, bool) {
        if byte == b'}' {
            let content = std::str::from_utf8(&self.bytes[content_start..rbrace_pos]).unwrap_or("");

            // Triple mustache: `{{{key}}}` swallows one more closing brace
            let mut end = self.pos + 1;
            let kind = if !content.starts_with('{') {
                Self::classify_content(content)
            } else if self.bytes.get(end) == Some(&b'}') {
                end += 1;
                Self::classify_content(content)
            } else {
                TokenKind::Malformed {
                    message: format!("Unbalanced triple mustache '{{{{{}}}}}'", content),
                }
            };

            let token = Token {
                kind,
                start,
                length: end - start,
                line,
            };

            self.state = ScanState::Normal;
            self.pos = end;

            (Some(token), true)
        } else {
            // Just a single } inside content, continue scanning
            self.state = ScanState::InToken {
                start,
                content_start,
                line,
            };
            (None, false)
        }
    }
}

impl Iterator for TokenStream<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        const MAX_STEPS_MULTIPLIER: usize = 3;
        let max_steps = self.bytes.len().saturating_mul(MAX_STEPS_MULTIPLIER);

        loop {
            if !self.should_continue(max_steps) {
                return None;
            }

            let byte = self.bytes[self.pos];
            #[cfg(test)]
            Self::record_test_step();

            match self.state.clone() {
                ScanState::Normal => self.process_normal_state(byte),
                ScanState::SeenLBrace { pos } => {
                    if !self.process_seen_lbrace(byte, pos) {
                        continue;
                    }
                }
                ScanState::InToken {
                    start,
                    content_start,
                    line,
                } => self.process_in_token(byte, start, content_start, line),
                ScanState::SeenRBrace {
                    start,
                    content_start,
                    rbrace_pos,
                    line,
                } => {
                    let (token, advanced) =
                        self.process_seen_rbrace(byte, start, content_start, rbrace_pos, line);
                    if let Some(token) = token {
                        return Some(token);
                    }
                    if !advanced {
                        continue;
                    }
                }
            }
        }
    }
}

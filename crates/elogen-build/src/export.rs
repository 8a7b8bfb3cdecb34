use crate::TAB;

///
/// PhpValue
/// A literal that can be exported into generated source. Export is
/// deterministic, order-preserving for lists and maps, and round-trips
/// scalars exactly.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PhpValue {
    Bool(bool),
    Int(i64),
    Str(String),
    List(Vec<PhpValue>),
    Map(Vec<(String, PhpValue)>),
}

impl PhpValue {
    pub fn str(value: impl Into<String>) -> Self {
        Self::Str(value.into())
    }

    #[must_use]
    pub fn string_list(items: &[String]) -> Self {
        Self::List(items.iter().map(|item| Self::str(item.clone())).collect())
    }

    /// Single-line export.
    #[must_use]
    pub fn export(&self) -> String {
        match self {
            Self::Bool(value) => value.to_string(),
            Self::Int(value) => value.to_string(),
            Self::Str(value) => quote_single(value),
            Self::List(items) => {
                let inner: Vec<String> = items.iter().map(Self::export).collect();
                format!("[{}]", inner.join(", "))
            }
            Self::Map(entries) => {
                let inner: Vec<String> = entries
                    .iter()
                    .map(|(key, value)| format!("{} => {}", quote_single(key), value.export()))
                    .collect();
                format!("[{}]", inner.join(", "))
            }
        }
    }

    /// Multi-line export for maps, one entry per line at `indent` + one tab.
    /// Scalars and lists fall back to the single-line form.
    #[must_use]
    pub fn export_indented(&self, indent: &str) -> String {
        match self {
            Self::Map(entries) if !entries.is_empty() => {
                let mut out = String::from("[\n");
                for (key, value) in entries {
                    out.push_str(indent);
                    out.push_str(TAB);
                    out.push_str(&quote_single(key));
                    out.push_str(" => ");
                    out.push_str(&value.export());
                    out.push_str(",\n");
                }
                out.push_str(indent);
                out.push(']');
                out
            }
            other => other.export(),
        }
    }
}

/// Single-quoted PHP string with `\` and `'` escaped.
fn quote_single(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{escaped}'")
}

/// Wrap `text` at `width` columns, inserting `break_str` at space
/// boundaries. Existing newlines are kept; a single word longer than the
/// width is left intact.
#[must_use]
pub fn word_wrap(text: &str, width: usize, break_str: &str) -> String {
    text.split('\n')
        .map(|line| wrap_line(line, width, break_str))
        .collect::<Vec<_>>()
        .join("\n")
}

fn wrap_line(line: &str, width: usize, break_str: &str) -> String {
    if line.len() <= width {
        return line.to_string();
    }

    let mut chunks: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in line.split(' ') {
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            chunks.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }

    chunks.join(break_str)
}

use tracing::debug;
use winnow::ascii::{dec_int, line_ending, till_line_ending};
use winnow::combinator::{
    alt, cut_err, eof, opt, peek, preceded, repeat, separated, terminated,
};
use winnow::error::{ModalResult, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::{any, take_while};

use super::parser::ParsedConfig;

// -- Whitespace & comments --------------------------------------------------

fn blank(input: &mut &str) -> ModalResult<()> {
    take_while(0.., [' ', '\t']).void().parse_next(input)
}

fn comment(input: &mut &str) -> ModalResult<()> {
    ('#', till_line_ending).void().parse_next(input)
}

fn ws(input: &mut &str) -> ModalResult<()> {
    let _: () = repeat(
        0..,
        alt((
            take_while(1.., |c: char| c.is_ascii_whitespace()).void(),
            comment,
        )),
    )
    .parse_next(input)?;
    Ok(())
}

/// Whatever may follow a value on its line: a trailing comment, then a
/// newline or the end of input.
fn line_end(input: &mut &str) -> ModalResult<()> {
    (blank, opt(comment), alt((line_ending, eof)))
        .void()
        .context(StrContext::Expected(StrContextValue::Description(
            "end of line",
        )))
        .parse_next(input)
}

// -- Keys -------------------------------------------------------------------

fn key<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| {
        c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')
    })
    .parse_next(input)
}

// -- Scalars ----------------------------------------------------------------

fn double_quoted(input: &mut &str) -> ModalResult<String> {
    preceded(
        '"',
        cut_err(double_quoted_body).context(StrContext::Expected(
            StrContextValue::CharLiteral('"'),
        )),
    )
    .parse_next(input)
}

fn double_quoted_body(input: &mut &str) -> ModalResult<String> {
    let mut s = String::new();
    loop {
        let ch = any.parse_next(input)?;
        match ch {
            '"' => return Ok(s),
            '\\' => {
                let esc = any.parse_next(input)?;
                match esc {
                    '"' => s.push('"'),
                    '\\' => s.push('\\'),
                    'n' => s.push('\n'),
                    't' => s.push('\t'),
                    other => {
                        s.push('\\');
                        s.push(other);
                    }
                }
            }
            c => s.push(c),
        }
    }
}

fn single_quoted(input: &mut &str) -> ModalResult<String> {
    preceded(
        '\'',
        cut_err(single_quoted_body).context(StrContext::Expected(
            StrContextValue::CharLiteral('\''),
        )),
    )
    .parse_next(input)
}

// `''` inside single quotes is a literal quote.
fn single_quoted_body(input: &mut &str) -> ModalResult<String> {
    let mut s = String::new();
    loop {
        let ch = any.parse_next(input)?;
        if ch != '\'' {
            s.push(ch);
        } else if opt('\'').parse_next(input)?.is_some() {
            s.push('\'');
        } else {
            return Ok(s);
        }
    }
}

/// Unquoted value running to the end of the line, minus any ` #` comment.
fn plain_line(input: &mut &str) -> ModalResult<String> {
    till_line_ending
        .map(|line: &str| {
            let value = line.find(" #").map_or(line, |at| &line[..at]);
            value.trim().to_owned()
        })
        .parse_next(input)
}

/// Unquoted value inside `[...]`, ending at `,` or `]`.
fn plain_flow(input: &mut &str) -> ModalResult<String> {
    take_while(1.., |c: char| !matches!(c, ',' | ']' | '#' | '\n' | '\r'))
        .map(|s: &str| s.trim_end().to_owned())
        .parse_next(input)
}

// -- Values -----------------------------------------------------------------

/// `~`, `null`, or nothing at all before the end of the line.
fn null(input: &mut &str) -> ModalResult<()> {
    preceded(
        blank,
        alt((alt(("~", "null", "Null", "NULL")).void(), peek(line_end))),
    )
    .parse_next(input)
}

fn priority(input: &mut &str) -> ModalResult<Option<i64>> {
    alt((
        preceded(blank, dec_int::<_, i64, _>).map(Some),
        null.value(None),
    ))
    .context(StrContext::Expected(StrContextValue::Description(
        "integer priority",
    )))
    .parse_next(input)
}

fn boolean(input: &mut &str) -> ModalResult<Option<bool>> {
    alt((
        preceded(
            blank,
            alt((
                alt(("true", "True", "TRUE")).value(Some(true)),
                alt(("false", "False", "FALSE")).value(Some(false)),
            )),
        ),
        null.value(None),
    ))
    .context(StrContext::Expected(StrContextValue::Description(
        "`true` or `false`",
    )))
    .parse_next(input)
}

// -- Condition lists --------------------------------------------------------

fn block_item(input: &mut &str) -> ModalResult<String> {
    preceded(
        (ws, '-', blank),
        cut_err(terminated(
            alt((double_quoted, single_quoted, plain_line)),
            line_end,
        )),
    )
    .parse_next(input)
}

fn flow_item(input: &mut &str) -> ModalResult<String> {
    alt((double_quoted, single_quoted, plain_flow)).parse_next(input)
}

fn flow_list(input: &mut &str) -> ModalResult<Vec<String>> {
    preceded(
        ('[', ws),
        cut_err(terminated(
            separated(0.., flow_item, (ws, ',', ws)),
            (ws, opt(','), ws, ']'),
        ))
        .context(StrContext::Expected(StrContextValue::CharLiteral(']'))),
    )
    .parse_next(input)
}

fn conditions(input: &mut &str) -> ModalResult<Vec<String>> {
    blank.parse_next(input)?;
    alt((
        terminated(flow_list, line_end),
        preceded(line_end, repeat(0.., block_item)),
        terminated(alt(("~", "null", "Null", "NULL")), line_end).value(Vec::new()),
    ))
    .context(StrContext::Expected(StrContextValue::Description(
        "list of conditions",
    )))
    .parse_next(input)
}

// -- Ignored keys -----------------------------------------------------------

fn rest_of_line(input: &mut &str) -> ModalResult<()> {
    (till_line_ending, alt((line_ending, eof)))
        .void()
        .parse_next(input)
}

/// A line belonging to the value of the key above it: indented, a `-` list
/// item, a comment, or empty.
fn continuation_line(input: &mut &str) -> ModalResult<()> {
    alt((
        (take_while(1.., [' ', '\t']), rest_of_line).void(),
        ('-', rest_of_line).void(),
        comment_line,
        line_ending.void(),
    ))
    .parse_next(input)
}

fn comment_line(input: &mut &str) -> ModalResult<()> {
    (comment, alt((line_ending, eof))).void().parse_next(input)
}

/// The value of a key the router config does not use, scalar or nested.
fn ignored_value(input: &mut &str) -> ModalResult<()> {
    rest_of_line.parse_next(input)?;
    let _: () = repeat(0.., continuation_line).parse_next(input)?;
    Ok(())
}

// -- Top-level parser -------------------------------------------------------

pub fn parse_config(input: &mut &str) -> ModalResult<ParsedConfig> {
    let mut parsed = ParsedConfig::default();

    ws.parse_next(input)?;
    opt(("---", line_end)).parse_next(input)?;

    loop {
        ws.parse_next(input)?;
        if input.is_empty() {
            return Ok(parsed);
        }

        let name = cut_err(key)
            .context(StrContext::Expected(StrContextValue::Description(
                "config key",
            )))
            .parse_next(input)?;
        (
            blank,
            cut_err(':').context(StrContext::Expected(StrContextValue::CharLiteral(':'))),
        )
            .parse_next(input)?;

        match name {
            "priority" => {
                parsed.priority = cut_err(terminated(priority, line_end)).parse_next(input)?;
            }
            "force" => {
                parsed.force = cut_err(terminated(boolean, line_end)).parse_next(input)?;
            }
            "conditions" => {
                parsed.conditions = Some(cut_err(conditions).parse_next(input)?);
            }
            _ => {
                debug!(key = name, "ignoring unknown router config key");
                ignored_value.parse_next(input)?;
            }
        }
    }
}

use super::nomerr::PErr;
use crate::error::ParseError;
use crate::tree::{CharSet, Node, NodeKind, Postfix};
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::combinator::{map, opt, value, verify};
use nom::multi::{many0, many1};
use nom::sequence::{delimited, preceded};
use nom::IResult;

type Input<'a> = &'a [u8];
type PResult<'a, T> = IResult<Input<'a>, T, PErr<'a>>;

/// Bytes with syntactic meaning at the position `atom` is tried from: `|`
/// and `)` end a concatenation (spec.md's `concat := repeat repeat* --
/// stops at ')' or '|' or end`), `(` and `[` open a group or class. `]`
/// is not reserved here — outside of an open `[...]` it is an ordinary
/// byte, exactly as in `original_source`'s `parse_atom`, which has no
/// notion of a reserved alphabet at all.
const RESERVED: &[u8] = b"|*+?()[";

pub fn regex(input: Input) -> PResult<Node> {
    alternation(input)
}

fn alternation(input: Input) -> PResult<Node> {
    let (input, first) = concatenation(input)?;
    let (input, rest) = many0(preceded(tag(b"|"), concatenation))(input)?;
    if rest.is_empty() {
        Ok((input, first))
    } else {
        let mut branches = vec![first];
        branches.extend(rest);
        Ok((input, Node::new(NodeKind::Alt(branches))))
    }
}

fn concatenation(input: Input) -> PResult<Node> {
    let (input, mut nodes) = many1(repeat_expr)(input)?;
    if nodes.len() == 1 {
        Ok((input, nodes.pop().unwrap()))
    } else {
        Ok((input, Node::new(NodeKind::Concat(nodes))))
    }
}

fn repeat_expr(input: Input) -> PResult<Node> {
    let (input, atom_node) = atom(input)?;
    let (input, postfix) = opt(postfix_op)(input)?;
    match postfix {
        Some(p) => Ok((input, Node::with_postfix(atom_node.kind, p))),
        None => Ok((input, atom_node)),
    }
}

fn postfix_op(input: Input) -> PResult<Postfix> {
    alt((
        value(Postfix::Star, tag(b"*")),
        value(Postfix::Plus, tag(b"+")),
        value(Postfix::Optional, tag(b"?")),
    ))(input)
}

fn atom(input: Input) -> PResult<Node> {
    alt((class_atom, paren_atom, char_atom))(input)
}

fn paren_atom(input: Input) -> PResult<Node> {
    delimited(tag(b"("), regex, tag(b")"))(input)
}

fn char_atom(input: Input) -> PResult<Node> {
    let (rest, c) = one_regular_char(input)?;
    Ok((rest, Node::new(NodeKind::Char(c))))
}

/// A single literal byte: stands for itself, as long as it is not one of
/// the grammar's reserved bytes. `.` is stored as `Char(b'.')` like any
/// other byte (spec.md §4.1); its wildcard meaning is realized only at
/// NFA-build time.
fn one_regular_char(input: Input) -> PResult<u8> {
    verify(verify_any_byte, |b: &u8| !RESERVED.contains(b))(input)
}

fn verify_any_byte(input: Input) -> PResult<u8> {
    match input.first() {
        Some(&b) => Ok((&input[1..], b)),
        None => Err(nom::Err::Error(PErr { input, cause: None })),
    }
}

/// `class := '[' '^'? class_body ']'`, except the closing `]` is optional:
/// spec.md §4.1 "Termination" requires a missing `]` to run the body to
/// end-of-input rather than fail the parse (`original_source`'s
/// `parse_class` never errors for a missing `]` either — it just stops
/// scanning at `end(s)`).
fn class_atom(input: Input) -> PResult<Node> {
    let (input, _) = tag(b"[")(input)?;
    let (input, negate) = map(opt(tag(b"^")), |o| o.is_some())(input)?;
    let (input, mut set) = class_body(input)?;
    let (input, _) = opt(tag(b"]"))(input)?;
    if negate {
        set.negate();
    }
    Ok((input, Node::new(NodeKind::Class(set))))
}

fn class_body(mut input: Input) -> PResult<CharSet> {
    let start = input;
    let mut set = CharSet::empty();
    let mut token_count = 0usize;

    loop {
        if input.first() == Some(&b']') || input.is_empty() {
            break;
        }

        let (after_first, first) = class_char(input)?;
        token_count += 1;
        if token_count > 255 {
            return Err(PErr::failure(start, ParseError::ClassTooLong));
        }

        let dash_starts_range = after_first.first() == Some(&b'-')
            && !matches!(after_first.get(1), None | Some(&b']'));
        if dash_starts_range {
            let (after_dash, _) = tag::<_, _, PErr>(b"-")(after_first)?;
            let (after_second, second) = class_char(after_dash)?;
            if first >= second {
                return Err(PErr::failure(
                    start,
                    ParseError::InvalidClassRange(first, second),
                ));
            }
            set.insert_range(first, second);
            input = after_second;
        } else {
            set.insert(first);
            input = after_first;
        }
    }

    Ok((input, set))
}

fn class_char(input: Input) -> PResult<u8> {
    verify_any_byte(input)
}

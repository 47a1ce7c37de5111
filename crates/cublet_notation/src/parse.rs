use chumsky::prelude::*;

use crate::{Face, Move};

/// Error produced while parsing move notation.
///
/// Multiple errors may be produced during the same parse.
pub type ParseError<'src> = Rich<'src, char, SimpleSpan>;
type ParseExtra<'src> = extra::Err<ParseError<'src>>;

/// Trait alias for parser.
pub(crate) trait NotationParser<'src, O>:
    Clone + Parser<'src, &'src str, O, ParseExtra<'src>>
{
}
impl<'src, O, T> NotationParser<'src, O> for T where
    T: Clone + Parser<'src, &'src str, O, ParseExtra<'src>>
{
}

/// Parses a single move token such as `R`, `U'`, `F2`, or `B'2`.
///
/// Leading and trailing whitespace is ignored. Returns `None` if the token is
/// not a valid move.
pub fn parse_move(token: &str) -> Option<Move> {
    move_()
        .padded()
        .then_ignore(end())
        .parse(token)
        .into_result()
        .ok()
}

/// Parses a whitespace-separated sequence of moves, such as a scramble.
pub fn parse_moves(s: &str) -> Result<Vec<Move>, Vec<ParseError<'_>>> {
    move_list().parse(s).into_result()
}

fn move_list<'src>() -> impl NotationParser<'src, Vec<Move>> {
    move_()
        .separated_by(text::whitespace().at_least(1))
        .collect()
        .padded()
        .then_ignore(end())
}

fn move_<'src>() -> impl NotationParser<'src, Move> {
    face()
        .then(just('\'').or_not())
        .then(just('2').or_not())
        .map(|((face, prime), double)| match double {
            Some(_) => Move::half(face, prime.is_none()),
            None => Move::quarter(face, prime.is_none()),
        })
        .labelled("move")
}

fn face<'src>() -> impl NotationParser<'src, Face> {
    choice((
        just('L').to(Face::L),
        just('R').to(Face::R),
        just('U').to(Face::U),
        just('D').to(Face::D),
        just('F').to(Face::F),
        just('B').to(Face::B),
    ))
    .labelled("face")
}

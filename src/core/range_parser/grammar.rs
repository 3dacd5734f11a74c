//##############################
//#  Range token grammar
//##############################

use super::RangeToken;

peg::parser! {
    pub(super) grammar range_parser() for str {
        rule uint() -> usize
            = n:$(['0'..='9']+)
            {? n.parse().or(Err("number that fits into usize")) }

        rule span() -> RangeToken
            = a:uint() "-" b:uint()
            { RangeToken::Span(a, b) }

        rule single() -> RangeToken
            = n:uint()
            { RangeToken::Single(n) }

        pub rule token() -> RangeToken
            = t:(span() / single()) { t }
    }
}

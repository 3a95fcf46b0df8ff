use crate::{ast::{ast::{Expr, ExprType, ExprWrapper}, expressions::{BinaryExpr, BooleanExpr, CallExpr, ConditionalExpr, NumberExpr, PrefixExpr, SymbolExpr}}, errors::errors::{Error, ErrorImpl}, lexer::tokens::TokenKind, Span};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<ExprWrapper, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud_fn) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(Error::new(ErrorImpl::UnexpectedTokenDetailed { token: parser.current_token().value.clone(), message: String::from("expected an expression") }, parser.get_position()));
    };

    let mut left = nud_fn(parser)?;

    // While the next operator binds tighter than the current context, keep extending lhs
    loop {
        let token_kind = parser.current_token_kind();
        let operator_bp = *parser.get_bp_lookup().get(&token_kind).unwrap_or(&BindingPower::Default);
        if operator_bp <= bp {
            break;
        }

        let Some(led_fn) = parser.get_led_lookup().get(&token_kind).copied() else {
            break;
        };
        left = led_fn(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let token = parser.advance();
            match token.value.parse::<f64>() {
                Ok(value) => Ok(ExprWrapper::new(NumberExpr { value, span: token.span })),
                Err(_) => Err(Error::new(ErrorImpl::NumberParseError { token: token.value }, token.span.start)),
            }
        },
        TokenKind::True | TokenKind::False => {
            let token = parser.advance();
            Ok(ExprWrapper::new(BooleanExpr { value: token.kind == TokenKind::True, span: token.span }))
        },
        TokenKind::Identifier => {
            let token = parser.advance();
            Ok(ExprWrapper::new(SymbolExpr { value: token.value, span: token.span }))
        },
        _ => {
            Err(Error::new(ErrorImpl::UnexpectedToken { token: parser.current_token().value.clone() }, parser.get_position()))
        }
    }
}

pub fn parse_binary_expr(parser: &mut Parser, left: ExprWrapper, bp: BindingPower) -> Result<ExprWrapper, Error> {
    let operator = parser.advance();
    let right = parse_expr(parser, bp)?;

    // Comparisons do not chain: `a < b < c` needs parentheses
    if bp == BindingPower::Relational
        && parser.get_bp_lookup().get(&parser.current_token_kind()) == Some(&BindingPower::Relational)
    {
        return Err(Error::new(ErrorImpl::UnexpectedTokenDetailed {
            token: parser.current_token().value.clone(),
            message: String::from("comparisons cannot be chained")
        }, parser.get_position()));
    }

    Ok(ExprWrapper::new(BinaryExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone()
        },
        left,
        operator,
        right,
    }))
}

/// `**` is right associative: the right operand may itself contain `**`.
pub fn parse_exponent_expr(parser: &mut Parser, left: ExprWrapper, _bp: BindingPower) -> Result<ExprWrapper, Error> {
    let operator = parser.advance();
    let right = parse_expr(parser, BindingPower::Multiplicative)?;

    Ok(ExprWrapper::new(BinaryExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone()
        },
        left,
        operator,
        right,
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let operator = parser.advance();
    let right_expr = parse_expr(parser, BindingPower::Unary)?;

    Ok(ExprWrapper::new(PrefixExpr {
        span: Span {
            start: operator.span.start.clone(),
            end: right_expr.get_span().end.clone()
        },
        operator,
        right_expr,
    }))
}

pub fn parse_conditional_expr(parser: &mut Parser, test: ExprWrapper, _bp: BindingPower) -> Result<ExprWrapper, Error> {
    parser.expect(TokenKind::Question)?;
    let consequent = parse_expr(parser, BindingPower::Default)?;

    let error = Error::new(ErrorImpl::UnexpectedTokenDetailed { token: parser.current_token().value.clone(), message: String::from("expected `:` in conditional expression") }, parser.get_position());
    parser.expect_error(TokenKind::Colon, Some(error))?;

    let alternate = parse_expr(parser, BindingPower::Default)?;

    Ok(ExprWrapper::new(ConditionalExpr {
        span: Span {
            start: test.get_span().start.clone(),
            end: alternate.get_span().end.clone()
        },
        test,
        consequent,
        alternate,
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_call_expr(parser: &mut Parser, left: ExprWrapper, _bp: BindingPower) -> Result<ExprWrapper, Error> {
    if left.get_expr_type() != ExprType::Symbol {
        return Err(Error::new(ErrorImpl::UnexpectedTokenDetailed { token: parser.current_token().value.clone(), message: String::from("only a function name can be called") }, parser.get_position()));
    }
    let callee = left.downcast::<SymbolExpr>().clone();

    parser.expect(TokenKind::OpenParen)?;

    let mut arguments = vec![];
    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            arguments.push(parse_expr(parser, BindingPower::Default)?);

            if parser.current_token_kind() == TokenKind::Comma {
                parser.advance();
            } else {
                break;
            }
        }
    }

    let close = parser.expect(TokenKind::CloseParen)?;

    Ok(ExprWrapper::new(CallExpr {
        span: Span {
            start: callee.span.start.clone(),
            end: close.span.end
        },
        callee,
        arguments,
    }))
}

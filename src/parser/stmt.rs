use crate::{ast::{ast::StmtWrapper, expressions::SymbolExpr, statements::{AssignmentStmt, BlockStmt, FnDeclStmt, PrintStmt, VarDeclStmt, WhileStmt}}, errors::errors::{Error, ErrorImpl}, lexer::tokens::TokenKind, parser::{expr::parse_expr, lookups::BindingPower}, Span};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    if let Some(stmt_fn) = parser.get_stmt_lookup().get(&parser.current_token_kind()).copied() {
        return stmt_fn(parser);
    }

    if parser.current_token_kind() == TokenKind::Identifier && parser.peek_kind() == TokenKind::Assignment {
        return parse_assignment_stmt(parser);
    }

    Err(Error::new(ErrorImpl::UnexpectedTokenDetailed {
        token: parser.current_token().value.clone(),
        message: String::from("expected a statement")
    }, parser.get_position()))
}

fn parse_identifier(parser: &mut Parser, context: &str) -> Result<SymbolExpr, Error> {
    let error = Error::new(ErrorImpl::UnexpectedTokenDetailed { token: parser.current_token().value.clone(), message: format!("expected identifier {}", context) }, parser.get_position());
    let token = parser.expect_error(TokenKind::Identifier, Some(error))?;

    Ok(SymbolExpr { value: token.value, span: token.span })
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.advance().span.start;

    let identifier = parse_identifier(parser, "during variable declaration")?;

    parser.expect(TokenKind::Assignment)?;
    let assigned_value = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(StmtWrapper::new(VarDeclStmt {
        span: Span {
            start,
            end: parser.get_previous_end()
        },
        identifier,
        assigned_value,
    }))
}

pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.advance().span.start;

    let identifier = parse_identifier(parser, "after `function`")?;

    parser.expect(TokenKind::OpenParen)?;

    let mut parameters = Vec::new();
    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            parameters.push(parse_identifier(parser, "in parameter list")?);

            if parser.current_token_kind() == TokenKind::Comma {
                parser.advance();
            } else {
                break;
            }
        }
    }

    parser.expect(TokenKind::CloseParen)?;
    parser.expect(TokenKind::Assignment)?;

    let body = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(StmtWrapper::new(FnDeclStmt {
        span: Span {
            start,
            end: parser.get_previous_end()
        },
        identifier,
        parameters,
        body,
    }))
}

pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let assignee = parse_identifier(parser, "as assignment target")?;

    parser.expect(TokenKind::Assignment)?;
    let value = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(StmtWrapper::new(AssignmentStmt {
        span: Span {
            start: assignee.span.start.clone(),
            end: parser.get_previous_end()
        },
        assignee,
        value,
    }))
}

pub fn parse_print_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.advance().span.start;

    let argument = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(StmtWrapper::new(PrintStmt {
        span: Span {
            start,
            end: parser.get_previous_end()
        },
        argument,
    }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.advance().span.start;

    let condition = parse_expr(parser, BindingPower::Default)?;
    let body = parse_block(parser)?;

    Ok(StmtWrapper::new(WhileStmt {
        span: Span {
            start,
            end: body.span.end.clone()
        },
        condition,
        body,
    }))
}

pub fn parse_block(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let start = parser.expect(TokenKind::OpenCurly)?.span.start;

    let mut body = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseCurly {
        if !parser.has_tokens() {
            return Err(Error::new(ErrorImpl::UnexpectedTokenDetailed {
                token: parser.current_token().value.clone(),
                message: String::from("expected `}` to close block")
            }, parser.get_position()));
        }
        body.push(parse_stmt(parser)?);
    }

    let end = parser.expect(TokenKind::CloseCurly)?.span.end;

    Ok(BlockStmt {
        body,
        span: Span { start, end }
    })
}

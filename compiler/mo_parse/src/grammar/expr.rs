//! Expression productions.
//!
//! Operator chains are parsed with the usual precedence ladder but kept
//! flat inside a single `Expression` node: the formatter only needs rule
//! kinds and token order, not operator nesting.

use crate::error::PResult;
use crate::Parser;
use mo_ir::{RuleKind, SyntaxNode, TokenKind};
use tracing::trace;

impl Parser<'_> {
    /// expression : if_expression | simple_expression
    pub(crate) fn expression(&mut self) -> PResult<SyntaxNode> {
        let mut node = SyntaxNode::new(RuleKind::Expression);
        if self.cursor.at(TokenKind::If) {
            node.push_rule(self.if_expression()?);
        } else {
            self.simple_into(&mut node)?;
        }
        Ok(node)
    }

    /// An `Expression` node restricted to a simple expression (no
    /// conditional). Used for equation left-hand sides.
    pub(crate) fn simple_expression_node(&mut self) -> PResult<SyntaxNode> {
        let mut node = SyntaxNode::new(RuleKind::Expression);
        self.simple_into(&mut node)?;
        Ok(node)
    }

    /// if_expression : if_expression_condition 'then' if_expression_body
    ///                 {elseif_expression_condition 'then' if_expression_body}
    ///                 else_expression_condition if_expression_body
    ///
    /// Each condition node carries its own keyword, so condition and body
    /// wrappers alternate and every branch starts with a keyword token.
    fn if_expression(&mut self) -> PResult<SyntaxNode> {
        trace!("if expression");
        let mut node = SyntaxNode::new(RuleKind::IfExpression);

        let mut condition = SyntaxNode::new(RuleKind::IfExpressionCondition);
        condition.push_token(self.cursor.expect(TokenKind::If, "`if`")?);
        condition.push_rule(self.expression()?);
        node.push_rule(condition);

        node.push_token(self.cursor.expect(TokenKind::Then, "`then`")?);
        node.push_rule(self.if_expression_body()?);

        while self.cursor.at(TokenKind::Elseif) {
            let mut elseif = SyntaxNode::new(RuleKind::ElseifExpressionCondition);
            elseif.push_token(self.cursor.bump());
            elseif.push_rule(self.expression()?);
            node.push_rule(elseif);

            node.push_token(self.cursor.expect(TokenKind::Then, "`then`")?);
            node.push_rule(self.if_expression_body()?);
        }

        let mut els = SyntaxNode::new(RuleKind::ElseExpressionCondition);
        els.push_token(self.cursor.expect(TokenKind::Else, "`else`")?);
        node.push_rule(els);
        node.push_rule(self.if_expression_body()?);

        Ok(node)
    }

    fn if_expression_body(&mut self) -> PResult<SyntaxNode> {
        let mut node = SyntaxNode::new(RuleKind::IfExpressionBody);
        node.push_rule(self.expression()?);
        Ok(node)
    }

    /// simple_expression : logical [':' logical [':' logical]]
    fn simple_into(&mut self, node: &mut SyntaxNode) -> PResult<()> {
        self.logical_into(node)?;
        if self.cursor.at(TokenKind::Colon) {
            node.push_token(self.cursor.bump());
            self.logical_into(node)?;
            if self.cursor.at(TokenKind::Colon) {
                node.push_token(self.cursor.bump());
                self.logical_into(node)?;
            }
        }
        Ok(())
    }

    /// logical_expression : logical_term { 'or' logical_term }
    fn logical_into(&mut self, node: &mut SyntaxNode) -> PResult<()> {
        self.logical_term_into(node)?;
        while let Some(or) = self.cursor.eat(TokenKind::Or) {
            node.push_token(or);
            self.logical_term_into(node)?;
        }
        Ok(())
    }

    /// logical_term : logical_factor { 'and' logical_factor }
    fn logical_term_into(&mut self, node: &mut SyntaxNode) -> PResult<()> {
        self.logical_factor_into(node)?;
        while let Some(and) = self.cursor.eat(TokenKind::And) {
            node.push_token(and);
            self.logical_factor_into(node)?;
        }
        Ok(())
    }

    /// logical_factor : ['not'] relation
    fn logical_factor_into(&mut self, node: &mut SyntaxNode) -> PResult<()> {
        if let Some(not) = self.cursor.eat(TokenKind::Not) {
            node.push_token(not);
        }
        self.relation_into(node)
    }

    /// relation : arithmetic [rel_op arithmetic]
    fn relation_into(&mut self, node: &mut SyntaxNode) -> PResult<()> {
        self.arithmetic_into(node)?;
        if matches!(
            self.cursor.kind(),
            TokenKind::Lt
                | TokenKind::Le
                | TokenKind::Gt
                | TokenKind::Ge
                | TokenKind::EqEq
                | TokenKind::Ne
        ) {
            node.push_token(self.cursor.bump());
            self.arithmetic_into(node)?;
        }
        Ok(())
    }

    /// arithmetic_expression : [add_op] term { add_op term }
    fn arithmetic_into(&mut self, node: &mut SyntaxNode) -> PResult<()> {
        if matches!(self.cursor.kind(), TokenKind::Plus | TokenKind::Minus) {
            node.push_token(self.cursor.bump());
        }
        self.term_into(node)?;
        while matches!(
            self.cursor.kind(),
            TokenKind::Plus | TokenKind::Minus | TokenKind::DotPlus | TokenKind::DotMinus
        ) {
            node.push_token(self.cursor.bump());
            self.term_into(node)?;
        }
        Ok(())
    }

    /// term : factor { mul_op factor }
    fn term_into(&mut self, node: &mut SyntaxNode) -> PResult<()> {
        self.factor_into(node)?;
        while matches!(
            self.cursor.kind(),
            TokenKind::Star | TokenKind::Slash | TokenKind::DotStar | TokenKind::DotSlash
        ) {
            node.push_token(self.cursor.bump());
            self.factor_into(node)?;
        }
        Ok(())
    }

    /// factor : primary [('^' | '.^') primary]
    fn factor_into(&mut self, node: &mut SyntaxNode) -> PResult<()> {
        self.primary_into(node)?;
        if matches!(self.cursor.kind(), TokenKind::Caret | TokenKind::DotCaret) {
            node.push_token(self.cursor.bump());
            self.primary_into(node)?;
        }
        Ok(())
    }

    /// primary : number | string | boolean | reference [call] | vector
    ///         | matrix | '(' output_expression_list ')' | 'end'
    fn primary_into(&mut self, node: &mut SyntaxNode) -> PResult<()> {
        match self.cursor.kind() {
            TokenKind::Number
            | TokenKind::Str
            | TokenKind::True
            | TokenKind::False
            | TokenKind::End => {
                node.push_token(self.cursor.bump());
            }
            TokenKind::Der | TokenKind::Initial => {
                // Builtin callables that lex as keywords.
                let mut callee = SyntaxNode::new(RuleKind::ComponentReference);
                callee.push_token(self.cursor.bump());
                node.push_rule(self.call_with_callee(callee)?);
            }
            TokenKind::LBrace => {
                let vector = self.vector()?;
                node.push_rule(vector);
            }
            TokenKind::LBracket => {
                let matrix = self.matrix()?;
                node.push_rule(matrix);
            }
            TokenKind::LParen => {
                node.push_token(self.cursor.bump());
                node.push_rule(self.expression()?);
                while let Some(comma) = self.cursor.eat(TokenKind::Comma) {
                    node.push_token(comma);
                    node.push_rule(self.expression()?);
                }
                node.push_token(self.cursor.expect(TokenKind::RParen, "`)`")?);
            }
            TokenKind::Ident | TokenKind::Dot => {
                let reference = self.component_reference()?;
                if self.cursor.at(TokenKind::LParen) {
                    node.push_rule(self.call_with_callee(reference)?);
                } else {
                    node.push_rule(reference);
                }
            }
            _ => return Err(self.cursor.unexpected("an expression")),
        }
        Ok(())
    }

    /// function_call : callee '(' [function_arguments] ')'
    pub(crate) fn call_with_callee(&mut self, callee: SyntaxNode) -> PResult<SyntaxNode> {
        let mut node = SyntaxNode::new(RuleKind::FunctionCall);
        node.push_rule(callee);
        node.push_token(self.cursor.expect(TokenKind::LParen, "`(`")?);
        if !self.cursor.at(TokenKind::RParen) {
            node.push_rule(self.function_arguments()?);
        }
        node.push_token(self.cursor.expect(TokenKind::RParen, "`)`")?);
        Ok(node)
    }

    /// function_arguments : argument { ',' argument } where argument is a
    /// named or positional function argument
    fn function_arguments(&mut self) -> PResult<SyntaxNode> {
        let mut node = SyntaxNode::new(RuleKind::FunctionArguments);
        loop {
            if self.cursor.at(TokenKind::Ident) && self.cursor.peek_kind(1) == TokenKind::Equals {
                let mut named = SyntaxNode::new(RuleKind::NamedArgument);
                named.push_token(self.cursor.bump());
                named.push_token(self.cursor.bump());
                named.push_rule(self.function_argument()?);
                node.push_rule(named);
            } else {
                node.push_rule(self.function_argument()?);
            }
            match self.cursor.eat(TokenKind::Comma) {
                Some(comma) => node.push_token(comma),
                None => break,
            }
        }
        Ok(node)
    }

    fn function_argument(&mut self) -> PResult<SyntaxNode> {
        let mut node = SyntaxNode::new(RuleKind::FunctionArgument);
        node.push_rule(self.expression()?);
        Ok(node)
    }

    /// vector : '{' [function_arguments] '}'
    fn vector(&mut self) -> PResult<SyntaxNode> {
        let mut node = SyntaxNode::new(RuleKind::Vector);
        node.push_token(self.cursor.expect(TokenKind::LBrace, "`{`")?);
        if !self.cursor.at(TokenKind::RBrace) {
            node.push_rule(self.function_arguments()?);
        }
        node.push_token(self.cursor.expect(TokenKind::RBrace, "`}`")?);
        Ok(node)
    }

    /// matrix : '[' expression_list { ';' expression_list } ']'
    fn matrix(&mut self) -> PResult<SyntaxNode> {
        let mut node = SyntaxNode::new(RuleKind::Matrix);
        node.push_token(self.cursor.expect(TokenKind::LBracket, "`[`")?);
        node.push_rule(self.expression_list()?);
        while let Some(semi) = self.cursor.eat(TokenKind::Semicolon) {
            node.push_token(semi);
            node.push_rule(self.expression_list()?);
        }
        node.push_token(self.cursor.expect(TokenKind::RBracket, "`]`")?);
        Ok(node)
    }

    /// expression_list : expression { ',' expression }
    fn expression_list(&mut self) -> PResult<SyntaxNode> {
        let mut node = SyntaxNode::new(RuleKind::ExpressionList);
        node.push_rule(self.expression()?);
        while let Some(comma) = self.cursor.eat(TokenKind::Comma) {
            node.push_token(comma);
            node.push_rule(self.expression()?);
        }
        Ok(node)
    }

    /// component_reference : ['.'] IDENT [subscripts] { '.' IDENT [subscripts] }
    pub(crate) fn component_reference(&mut self) -> PResult<SyntaxNode> {
        let mut node = SyntaxNode::new(RuleKind::ComponentReference);
        if let Some(dot) = self.cursor.eat(TokenKind::Dot) {
            node.push_token(dot);
        }
        node.push_token(self.cursor.expect(TokenKind::Ident, "identifier")?);
        if self.cursor.at(TokenKind::LBracket) {
            node.push_rule(self.subscripts()?);
        }
        while self.cursor.at(TokenKind::Dot) && self.cursor.peek_kind(1) == TokenKind::Ident {
            node.push_token(self.cursor.bump());
            node.push_token(self.cursor.bump());
            if self.cursor.at(TokenKind::LBracket) {
                node.push_rule(self.subscripts()?);
            }
        }
        Ok(node)
    }

    /// array_subscripts : '[' subscript { ',' subscript } ']'
    pub(crate) fn subscripts(&mut self) -> PResult<SyntaxNode> {
        let mut node = SyntaxNode::new(RuleKind::Subscripts);
        node.push_token(self.cursor.expect(TokenKind::LBracket, "`[`")?);
        loop {
            if self.cursor.at(TokenKind::Colon) {
                node.push_token(self.cursor.bump());
            } else {
                node.push_rule(self.expression()?);
            }
            match self.cursor.eat(TokenKind::Comma) {
                Some(comma) => node.push_token(comma),
                None => break,
            }
        }
        node.push_token(self.cursor.expect(TokenKind::RBracket, "`]`")?);
        Ok(node)
    }
}

//! Equation and statement sections, including control structures.

use crate::error::PResult;
use crate::Parser;
use mo_ir::{RuleKind, SyntaxNode, TokenKind};

impl Parser<'_> {
    /// equations : { equation ';' }
    pub(crate) fn equations(&mut self) -> PResult<SyntaxNode> {
        let mut node = SyntaxNode::new(RuleKind::Equations);
        while self.at_section_item() {
            node.push_rule(self.equation()?);
            node.push_token(self.cursor.expect(TokenKind::Semicolon, "`;`")?);
        }
        Ok(node)
    }

    /// algorithm_statements : { statement ';' }
    pub(crate) fn algorithm_statements(&mut self) -> PResult<SyntaxNode> {
        let mut node = SyntaxNode::new(RuleKind::AlgorithmStatements);
        while self.at_section_item() {
            node.push_rule(self.statement()?);
            node.push_token(self.cursor.expect(TokenKind::Semicolon, "`;`")?);
        }
        Ok(node)
    }

    /// Whether the current token can begin an equation or statement.
    fn at_section_item(&self) -> bool {
        !matches!(
            self.cursor.kind(),
            TokenKind::End
                | TokenKind::Public
                | TokenKind::Protected
                | TokenKind::Equation
                | TokenKind::Algorithm
                | TokenKind::Initial
                | TokenKind::Annotation
                | TokenKind::Else
                | TokenKind::Elseif
                | TokenKind::Elsewhen
                | TokenKind::Eof
        )
    }

    /// equation : (simple_expression ['=' expression] | if | for | when
    ///           | connect) comment
    fn equation(&mut self) -> PResult<SyntaxNode> {
        let mut node = SyntaxNode::new(RuleKind::Equation);
        match self.cursor.kind() {
            TokenKind::If => self.if_clause(&mut node, Self::equations)?,
            TokenKind::For => self.for_clause(&mut node, Self::equations)?,
            TokenKind::When => self.when_clause(&mut node, Self::equations)?,
            TokenKind::Connect => self.connect_clause(&mut node)?,
            _ => {
                node.push_rule(self.simple_expression_node()?);
                if let Some(eq) = self.cursor.eat(TokenKind::Equals) {
                    node.push_token(eq);
                    node.push_rule(self.expression()?);
                }
            }
        }
        if let Some(description) = self.description()? {
            node.push_rule(description);
        }
        Ok(node)
    }

    /// statement : (component_reference (':=' expression | call)
    ///           | '(' refs ')' ':=' call | if | for | while | when) comment
    fn statement(&mut self) -> PResult<SyntaxNode> {
        let mut node = SyntaxNode::new(RuleKind::Statement);
        match self.cursor.kind() {
            TokenKind::If => self.if_clause(&mut node, Self::algorithm_statements)?,
            TokenKind::For => self.for_clause(&mut node, Self::algorithm_statements)?,
            TokenKind::When => self.when_clause(&mut node, Self::algorithm_statements)?,
            TokenKind::While => self.while_clause(&mut node)?,
            TokenKind::LParen => {
                // Multiple-output call: '(' output_list ')' ':=' expression
                node.push_token(self.cursor.bump());
                node.push_rule(self.component_reference()?);
                while let Some(comma) = self.cursor.eat(TokenKind::Comma) {
                    node.push_token(comma);
                    node.push_rule(self.component_reference()?);
                }
                node.push_token(self.cursor.expect(TokenKind::RParen, "`)`")?);
                node.push_token(self.cursor.expect(TokenKind::Assign, "`:=`")?);
                node.push_rule(self.expression()?);
            }
            _ => {
                let reference = self.component_reference()?;
                if self.cursor.at(TokenKind::LParen) {
                    node.push_rule(self.call_with_callee(reference)?);
                } else {
                    node.push_rule(reference);
                    node.push_token(self.cursor.expect(TokenKind::Assign, "`:=`")?);
                    node.push_rule(self.expression()?);
                }
            }
        }
        if let Some(description) = self.description()? {
            node.push_rule(description);
        }
        Ok(node)
    }

    /// 'if' expression 'then' body {'elseif' expression 'then' body}
    /// ['else' body] 'end' 'if'
    fn if_clause(
        &mut self,
        node: &mut SyntaxNode,
        body: fn(&mut Self) -> PResult<SyntaxNode>,
    ) -> PResult<()> {
        node.push_token(self.cursor.expect(TokenKind::If, "`if`")?);
        node.push_rule(self.expression()?);
        node.push_token(self.cursor.expect(TokenKind::Then, "`then`")?);
        node.push_rule(self.control_structure_body(body)?);
        while let Some(elseif) = self.cursor.eat(TokenKind::Elseif) {
            node.push_token(elseif);
            node.push_rule(self.expression()?);
            node.push_token(self.cursor.expect(TokenKind::Then, "`then`")?);
            node.push_rule(self.control_structure_body(body)?);
        }
        if let Some(els) = self.cursor.eat(TokenKind::Else) {
            node.push_token(els);
            node.push_rule(self.control_structure_body(body)?);
        }
        node.push_token(self.cursor.expect(TokenKind::End, "`end`")?);
        node.push_token(self.cursor.expect(TokenKind::If, "`if`")?);
        Ok(())
    }

    /// 'for' for_indices 'loop' body 'end' 'for'
    fn for_clause(
        &mut self,
        node: &mut SyntaxNode,
        body: fn(&mut Self) -> PResult<SyntaxNode>,
    ) -> PResult<()> {
        node.push_token(self.cursor.expect(TokenKind::For, "`for`")?);
        node.push_rule(self.for_indices()?);
        node.push_token(self.cursor.expect(TokenKind::Loop, "`loop`")?);
        node.push_rule(self.control_structure_body(body)?);
        node.push_token(self.cursor.expect(TokenKind::End, "`end`")?);
        node.push_token(self.cursor.expect(TokenKind::For, "`for`")?);
        Ok(())
    }

    /// 'when' expression 'then' body {'elsewhen' expression 'then' body}
    /// 'end' 'when'
    fn when_clause(
        &mut self,
        node: &mut SyntaxNode,
        body: fn(&mut Self) -> PResult<SyntaxNode>,
    ) -> PResult<()> {
        node.push_token(self.cursor.expect(TokenKind::When, "`when`")?);
        node.push_rule(self.expression()?);
        node.push_token(self.cursor.expect(TokenKind::Then, "`then`")?);
        node.push_rule(self.control_structure_body(body)?);
        while let Some(elsewhen) = self.cursor.eat(TokenKind::Elsewhen) {
            node.push_token(elsewhen);
            node.push_rule(self.expression()?);
            node.push_token(self.cursor.expect(TokenKind::Then, "`then`")?);
            node.push_rule(self.control_structure_body(body)?);
        }
        node.push_token(self.cursor.expect(TokenKind::End, "`end`")?);
        node.push_token(self.cursor.expect(TokenKind::When, "`when`")?);
        Ok(())
    }

    /// 'while' expression 'loop' body 'end' 'while'
    fn while_clause(&mut self, node: &mut SyntaxNode) -> PResult<()> {
        node.push_token(self.cursor.expect(TokenKind::While, "`while`")?);
        node.push_rule(self.expression()?);
        node.push_token(self.cursor.expect(TokenKind::Loop, "`loop`")?);
        node.push_rule(self.control_structure_body(Self::algorithm_statements)?);
        node.push_token(self.cursor.expect(TokenKind::End, "`end`")?);
        node.push_token(self.cursor.expect(TokenKind::While, "`while`")?);
        Ok(())
    }

    /// connect_clause : 'connect' '(' component_reference ','
    ///                  component_reference ')'
    fn connect_clause(&mut self, node: &mut SyntaxNode) -> PResult<()> {
        node.push_token(self.cursor.expect(TokenKind::Connect, "`connect`")?);
        node.push_token(self.cursor.expect(TokenKind::LParen, "`(`")?);
        node.push_rule(self.component_reference()?);
        node.push_token(self.cursor.expect(TokenKind::Comma, "`,`")?);
        node.push_rule(self.component_reference()?);
        node.push_token(self.cursor.expect(TokenKind::RParen, "`)`")?);
        Ok(())
    }

    /// The body of a control structure, wrapping a nested section.
    fn control_structure_body(
        &mut self,
        body: fn(&mut Self) -> PResult<SyntaxNode>,
    ) -> PResult<SyntaxNode> {
        let mut node = SyntaxNode::new(RuleKind::ControlStructureBody);
        node.push_rule(body(self)?);
        Ok(node)
    }

    /// for_indices : IDENT ['in' expression] { ',' IDENT ['in' expression] }
    fn for_indices(&mut self) -> PResult<SyntaxNode> {
        let mut node = SyntaxNode::new(RuleKind::ForIndices);
        loop {
            node.push_token(self.cursor.expect(TokenKind::Ident, "loop variable")?);
            if let Some(kw) = self.cursor.eat(TokenKind::In) {
                node.push_token(kw);
                node.push_rule(self.expression()?);
            }
            match self.cursor.eat(TokenKind::Comma) {
                Some(comma) => node.push_token(comma),
                None => break,
            }
        }
        Ok(node)
    }
}

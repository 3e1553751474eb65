//! Item-level productions: stored definitions, class definitions,
//! compositions, elements, and modifications.

use crate::error::PResult;
use crate::Parser;
use mo_ir::{RuleKind, SyntaxNode, TokenKind};
use tracing::trace;

/// Kinds that can begin a class definition (after element prefixes).
const CLASS_START: &[TokenKind] = &[
    TokenKind::Encapsulated,
    TokenKind::Partial,
    TokenKind::Expandable,
    TokenKind::Operator,
    TokenKind::Pure,
    TokenKind::Impure,
    TokenKind::Class,
    TokenKind::Model,
    TokenKind::Record,
    TokenKind::Block,
    TokenKind::Connector,
    TokenKind::Type,
    TokenKind::Package,
    TokenKind::Function,
];

/// Component type prefixes.
const TYPE_PREFIX: &[TokenKind] = &[
    TokenKind::Flow,
    TokenKind::Stream,
    TokenKind::Discrete,
    TokenKind::Parameter,
    TokenKind::Constant,
    TokenKind::Input,
    TokenKind::Output,
];

/// Element prefixes shared by declarations and redeclarations.
const ELEMENT_PREFIX: &[TokenKind] = &[
    TokenKind::Redeclare,
    TokenKind::Final,
    TokenKind::Inner,
    TokenKind::Outer,
    TokenKind::Replaceable,
];

impl Parser<'_> {
    /// stored_definition : ['within' [name] ';'] { ['final'] class_definition ';' }
    pub(crate) fn stored_definition(&mut self) -> PResult<SyntaxNode> {
        let mut node = SyntaxNode::new(RuleKind::StoredDefinition);
        if let Some(within) = self.cursor.eat(TokenKind::Within) {
            node.push_token(within);
            if !self.cursor.at(TokenKind::Semicolon) {
                self.name_into(&mut node)?;
            }
            node.push_token(self.cursor.expect(TokenKind::Semicolon, "`;`")?);
        }
        while !self.cursor.at_eof() {
            if let Some(fin) = self.cursor.eat(TokenKind::Final) {
                node.push_token(fin);
            }
            node.push_rule(self.class_definition()?);
            node.push_token(self.cursor.expect(TokenKind::Semicolon, "`;`")?);
        }
        Ok(node)
    }

    /// class_definition : ['encapsulated'] class_prefixes class_specifier
    pub(crate) fn class_definition(&mut self) -> PResult<SyntaxNode> {
        let mut node = SyntaxNode::new(RuleKind::ClassDefinition);
        while matches!(
            self.cursor.kind(),
            TokenKind::Encapsulated
                | TokenKind::Partial
                | TokenKind::Expandable
                | TokenKind::Operator
                | TokenKind::Pure
                | TokenKind::Impure
        ) {
            node.push_token(self.cursor.bump());
        }
        match self.cursor.kind() {
            TokenKind::Class
            | TokenKind::Model
            | TokenKind::Record
            | TokenKind::Block
            | TokenKind::Connector
            | TokenKind::Type
            | TokenKind::Package
            | TokenKind::Function => node.push_token(self.cursor.bump()),
            _ => return Err(self.cursor.unexpected("a class keyword")),
        }
        node.push_rule(self.class_specifier()?);
        Ok(node)
    }

    /// class_specifier : IDENT '=' ... | IDENT [string_comment] composition 'end' IDENT
    fn class_specifier(&mut self) -> PResult<SyntaxNode> {
        let mut node = SyntaxNode::new(RuleKind::ClassSpecifier);
        node.push_token(self.cursor.expect(TokenKind::Ident, "class name")?);

        if let Some(eq) = self.cursor.eat(TokenKind::Equals) {
            // Short class specifier: IDENT '=' type_specifier
            // [array_subscripts] [class_modification] comment
            trace!("class specifier: short form");
            node.push_token(eq);
            while TYPE_PREFIX.contains(&self.cursor.kind()) {
                node.push_token(self.cursor.bump());
            }
            self.name_into(&mut node)?;
            if self.cursor.at(TokenKind::LBracket) {
                node.push_rule(self.subscripts()?);
            }
            if self.cursor.at(TokenKind::LParen) {
                node.push_rule(self.class_modification()?);
            }
            if let Some(description) = self.description()? {
                node.push_rule(description);
            }
            return Ok(node);
        }

        trace!("class specifier: long form");
        if self.cursor.at(TokenKind::Str) {
            let comment = self.string_comment()?;
            node.push_rule(comment);
        }
        node.push_rule(self.composition()?);
        node.push_token(self.cursor.expect(TokenKind::End, "`end`")?);
        node.push_token(self.cursor.expect(TokenKind::Ident, "class name")?);
        Ok(node)
    }

    /// composition : element_list { section } ['annotation' class_modification ';']
    fn composition(&mut self) -> PResult<SyntaxNode> {
        let mut node = SyntaxNode::new(RuleKind::Composition);
        node.push_rule(self.element_list()?);
        loop {
            match self.cursor.kind() {
                TokenKind::Public | TokenKind::Protected => {
                    node.push_token(self.cursor.bump());
                    node.push_rule(self.element_list()?);
                }
                TokenKind::Initial if self.cursor.peek_kind(1) == TokenKind::Equation => {
                    node.push_token(self.cursor.bump());
                    node.push_token(self.cursor.bump());
                    node.push_rule(self.equations()?);
                }
                TokenKind::Initial if self.cursor.peek_kind(1) == TokenKind::Algorithm => {
                    node.push_token(self.cursor.bump());
                    node.push_token(self.cursor.bump());
                    node.push_rule(self.algorithm_statements()?);
                }
                TokenKind::Equation => {
                    node.push_token(self.cursor.bump());
                    node.push_rule(self.equations()?);
                }
                TokenKind::Algorithm => {
                    node.push_token(self.cursor.bump());
                    node.push_rule(self.algorithm_statements()?);
                }
                _ => break,
            }
        }
        if self.cursor.at(TokenKind::Annotation) {
            let annotation = self.annotation()?;
            node.push_rule(annotation);
            node.push_token(self.cursor.expect(TokenKind::Semicolon, "`;`")?);
        }
        Ok(node)
    }

    /// element_list : { element ';' }
    fn element_list(&mut self) -> PResult<SyntaxNode> {
        let mut node = SyntaxNode::new(RuleKind::ElementList);
        loop {
            match self.cursor.kind() {
                TokenKind::Public
                | TokenKind::Protected
                | TokenKind::Equation
                | TokenKind::Algorithm
                | TokenKind::Initial
                | TokenKind::End
                | TokenKind::Annotation
                | TokenKind::Eof => break,
                _ => {
                    node.push_rule(self.element()?);
                    node.push_token(self.cursor.expect(TokenKind::Semicolon, "`;`")?);
                }
            }
        }
        Ok(node)
    }

    /// element : import_clause | extends_clause
    ///         | prefixes (class_definition | component_clause)
    ///           [constraining_clause comment]
    fn element(&mut self) -> PResult<SyntaxNode> {
        let mut node = SyntaxNode::new(RuleKind::Element);
        match self.cursor.kind() {
            TokenKind::Import => node.push_rule(self.import_clause()?),
            TokenKind::Extends => node.push_rule(self.extends_clause()?),
            _ => {
                while ELEMENT_PREFIX.contains(&self.cursor.kind()) {
                    node.push_token(self.cursor.bump());
                }
                if CLASS_START.contains(&self.cursor.kind()) {
                    node.push_rule(self.class_definition()?);
                } else {
                    node.push_rule(self.component_clause()?);
                }
                if self.cursor.at(TokenKind::Constrainedby) {
                    node.push_rule(self.constraining_clause()?);
                    if let Some(description) = self.description()? {
                        node.push_rule(description);
                    }
                }
            }
        }
        Ok(node)
    }

    /// import_clause : 'import' (IDENT '=' name | name ['.' '*'])
    fn import_clause(&mut self) -> PResult<SyntaxNode> {
        let mut node = SyntaxNode::new(RuleKind::ImportClause);
        node.push_token(self.cursor.expect(TokenKind::Import, "`import`")?);
        if self.cursor.at(TokenKind::Ident) && self.cursor.peek_kind(1) == TokenKind::Equals {
            node.push_token(self.cursor.bump());
            node.push_token(self.cursor.bump());
            self.name_into(&mut node)?;
        } else {
            self.name_into(&mut node)?;
            if self.cursor.at(TokenKind::Dot) && self.cursor.peek_kind(1) == TokenKind::Star {
                node.push_token(self.cursor.bump());
                node.push_token(self.cursor.bump());
            }
        }
        if let Some(description) = self.description()? {
            node.push_rule(description);
        }
        Ok(node)
    }

    /// extends_clause : 'extends' name [class_modification] [annotation]
    fn extends_clause(&mut self) -> PResult<SyntaxNode> {
        let mut node = SyntaxNode::new(RuleKind::ExtendsClause);
        node.push_token(self.cursor.expect(TokenKind::Extends, "`extends`")?);
        self.name_into(&mut node)?;
        if self.cursor.at(TokenKind::LParen) {
            node.push_rule(self.class_modification()?);
        }
        if self.cursor.at(TokenKind::Annotation) {
            let annotation = self.annotation()?;
            node.push_rule(annotation);
        }
        Ok(node)
    }

    /// constraining_clause : 'constrainedby' name [class_modification]
    fn constraining_clause(&mut self) -> PResult<SyntaxNode> {
        let mut node = SyntaxNode::new(RuleKind::ConstrainingClause);
        node.push_token(self.cursor.expect(TokenKind::Constrainedby, "`constrainedby`")?);
        self.name_into(&mut node)?;
        if self.cursor.at(TokenKind::LParen) {
            node.push_rule(self.class_modification()?);
        }
        Ok(node)
    }

    /// component_clause : type_prefix type_specifier [array_subscripts]
    ///                    component_declaration { ',' component_declaration }
    fn component_clause(&mut self) -> PResult<SyntaxNode> {
        let mut node = SyntaxNode::new(RuleKind::ComponentClause);
        while TYPE_PREFIX.contains(&self.cursor.kind()) {
            node.push_token(self.cursor.bump());
        }
        self.name_into(&mut node)?;
        if self.cursor.at(TokenKind::LBracket) {
            node.push_rule(self.subscripts()?);
        }
        loop {
            self.component_declaration(&mut node)?;
            match self.cursor.eat(TokenKind::Comma) {
                Some(comma) => node.push_token(comma),
                None => break,
            }
        }
        Ok(node)
    }

    /// component_declaration : declaration ['if' expression] comment
    fn component_declaration(&mut self, clause: &mut SyntaxNode) -> PResult<()> {
        clause.push_rule(self.declaration()?);
        if let Some(kw) = self.cursor.eat(TokenKind::If) {
            clause.push_token(kw);
            clause.push_rule(self.expression()?);
        }
        if let Some(description) = self.description()? {
            clause.push_rule(description);
        }
        Ok(())
    }

    /// declaration : IDENT [array_subscripts] [modification]
    fn declaration(&mut self) -> PResult<SyntaxNode> {
        let mut node = SyntaxNode::new(RuleKind::Declaration);
        node.push_token(self.cursor.expect(TokenKind::Ident, "component name")?);
        if self.cursor.at(TokenKind::LBracket) {
            node.push_rule(self.subscripts()?);
        }
        if matches!(
            self.cursor.kind(),
            TokenKind::LParen | TokenKind::Equals | TokenKind::Assign
        ) {
            node.push_rule(self.modification()?);
        }
        Ok(node)
    }

    /// modification : class_modification ['=' expression]
    ///              | '=' expression | ':=' expression
    fn modification(&mut self) -> PResult<SyntaxNode> {
        let mut node = SyntaxNode::new(RuleKind::Modification);
        if self.cursor.at(TokenKind::LParen) {
            node.push_rule(self.class_modification()?);
            if matches!(self.cursor.kind(), TokenKind::Equals | TokenKind::Assign) {
                node.push_token(self.cursor.bump());
                node.push_rule(self.expression()?);
            }
        } else {
            match self.cursor.kind() {
                TokenKind::Equals | TokenKind::Assign => {
                    node.push_token(self.cursor.bump());
                    node.push_rule(self.expression()?);
                }
                _ => return Err(self.cursor.unexpected("a modification")),
            }
        }
        Ok(node)
    }

    /// class_modification : '(' [argument_list] ')'
    pub(crate) fn class_modification(&mut self) -> PResult<SyntaxNode> {
        let mut node = SyntaxNode::new(RuleKind::ClassModification);
        node.push_token(self.cursor.expect(TokenKind::LParen, "`(`")?);
        if !self.cursor.at(TokenKind::RParen) {
            node.push_rule(self.argument_list()?);
        }
        node.push_token(self.cursor.expect(TokenKind::RParen, "`)`")?);
        Ok(node)
    }

    /// argument_list : argument { ',' argument }
    fn argument_list(&mut self) -> PResult<SyntaxNode> {
        let mut node = SyntaxNode::new(RuleKind::ArgumentList);
        node.push_rule(self.argument()?);
        while let Some(comma) = self.cursor.eat(TokenKind::Comma) {
            node.push_token(comma);
            node.push_rule(self.argument()?);
        }
        Ok(node)
    }

    /// argument : element_modification_or_replaceable | element_redeclaration
    fn argument(&mut self) -> PResult<SyntaxNode> {
        let mut node = SyntaxNode::new(RuleKind::Argument);
        if let Some(redeclare) = self.cursor.eat(TokenKind::Redeclare) {
            node.push_token(redeclare);
            self.eat_each_final(&mut node);
            if CLASS_START.contains(&self.cursor.kind()) {
                node.push_rule(self.class_definition()?);
            } else {
                node.push_rule(self.component_clause_single()?);
            }
            return Ok(node);
        }

        self.eat_each_final(&mut node);
        if let Some(replaceable) = self.cursor.eat(TokenKind::Replaceable) {
            node.push_token(replaceable);
            if CLASS_START.contains(&self.cursor.kind()) {
                node.push_rule(self.class_definition()?);
            } else {
                node.push_rule(self.component_clause_single()?);
            }
            if self.cursor.at(TokenKind::Constrainedby) {
                node.push_rule(self.constraining_clause()?);
            }
            return Ok(node);
        }

        // element_modification : name [modification] [string_comment]
        self.name_into(&mut node)?;
        if matches!(
            self.cursor.kind(),
            TokenKind::LParen | TokenKind::Equals | TokenKind::Assign
        ) {
            node.push_rule(self.modification()?);
        }
        if self.cursor.at(TokenKind::Str) {
            let comment = self.string_comment()?;
            node.push_rule(comment);
        }
        Ok(node)
    }

    /// component_clause1 : type_prefix type_specifier declaration comment
    fn component_clause_single(&mut self) -> PResult<SyntaxNode> {
        let mut node = SyntaxNode::new(RuleKind::ComponentClause);
        while TYPE_PREFIX.contains(&self.cursor.kind()) {
            node.push_token(self.cursor.bump());
        }
        self.name_into(&mut node)?;
        node.push_rule(self.declaration()?);
        if let Some(description) = self.description()? {
            node.push_rule(description);
        }
        Ok(node)
    }

    fn eat_each_final(&mut self, node: &mut SyntaxNode) {
        while matches!(self.cursor.kind(), TokenKind::Each | TokenKind::Final) {
            node.push_token(self.cursor.bump());
        }
    }
}

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::ast::{Node, OperationKey};
use crate::errors::RuntimeError;
use crate::token::NEGATION_DISPLAY;

pub const DEFAULT_MAX_PROPOSITIONS: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellType {
    Variable,
    VariableNegative,
    Result,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub element: String,
    pub value: bool,
    #[serde(rename = "type")]
    pub cell_type: CellType,
    pub column: usize,
    pub row: usize,
    pub position: String,
}

/// A distinct proposition of the tree. `negatived` is set when any of its
/// occurrences is negated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub value: String,
    pub negatived: bool,
}

impl Variable {
    pub fn negated_name(&self) -> String {
        format!("{}{}", NEGATION_DISPLAY, self.value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub expression: String,
    pub value: bool,
    pub operands: Vec<bool>,
    pub key: OperationKey,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Evaluation {
    pub steps: Vec<Step>,
    pub value: bool,
    pub text: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct Structure {
    pub propositions: Vec<String>,
    pub variables: Vec<Variable>,
    pub columns: usize,
    pub rows: usize,
    pub structure: Vec<Cell>,
    #[serde(skip)]
    steps: Vec<Vec<Step>>,
    #[serde(skip)]
    results: Vec<bool>,
}

impl Structure {
    pub fn generate(nodes: &[Node]) -> Result<Structure, RuntimeError> {
        Structure::generate_with_limit(nodes, DEFAULT_MAX_PROPOSITIONS)
    }

    pub fn generate_with_limit(nodes: &[Node], limit: usize) -> Result<Structure, RuntimeError> {
        let variables = discover(nodes);
        if variables.len() > limit {
            warn!("Refusing {} propositions (limit {})", variables.len(), limit);
            return Err(RuntimeError::TooManyPropositions {
                count: variables.len(),
                limit,
            });
        }

        let base = variables.len();
        let rows = 1usize << base;
        let negated: Vec<&Variable> = variables.iter().filter(|v| v.negatived).collect();
        debug!(
            "{} proposition(s), {} negated, {} row(s)",
            base,
            negated.len(),
            rows
        );

        let mut propositions: Vec<String> = variables.iter().map(|v| v.value.clone()).collect();
        propositions.extend(negated.iter().map(|v| v.negated_name()));

        let mut structure = Vec::<Cell>::new();
        let mut steps = Vec::<Vec<Step>>::with_capacity(rows);
        let mut results = Vec::<bool>::with_capacity(rows);

        for row in 0..rows {
            let mut assignment = HashMap::<&str, bool>::new();

            for (column, variable) in variables.iter().enumerate() {
                let value = truth_value(row, column, base);
                assignment.insert(variable.value.as_str(), value);
                structure.push(cell(&variable.value, value, CellType::Variable, row, column));
            }

            for (offset, variable) in negated.iter().enumerate() {
                let value = !assignment[variable.value.as_str()];
                structure.push(cell(
                    &variable.negated_name(),
                    value,
                    CellType::VariableNegative,
                    row,
                    base + offset,
                ));
            }

            let evaluation = evaluate(nodes, &assignment);
            trace!("Row {}: {:?}", row, evaluation.steps);

            let mut filled = Vec::<usize>::new();
            for step in &evaluation.steps {
                let column = match propositions.iter().position(|p| *p == step.expression) {
                    Some(column) => column,
                    None => {
                        propositions.push(step.expression.clone());
                        propositions.len() - 1
                    }
                };
                if filled.contains(&column) {
                    continue;
                }
                filled.push(column);
                structure.push(cell(&step.expression, step.value, CellType::Result, row, column));
            }

            results.push(evaluation.value);
            steps.push(evaluation.steps);
        }

        // Result cells were appended in walk order; keep rows ordered by column
        structure.sort_by_key(|cell| (cell.row, cell.column));

        Ok(Structure {
            columns: propositions.len(),
            propositions,
            variables,
            rows,
            structure,
            steps,
            results,
        })
    }

    pub fn get(&self, row: usize, column: usize) -> Option<&Cell> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        let index = row.checked_mul(self.columns)?.checked_add(column)?;
        self.structure.get(index)
    }

    pub fn at(&self, position: &str) -> Option<&Cell> {
        let (row, column) = position.split_once('x')?;
        self.get(row.parse().ok()?, column.parse().ok()?)
    }

    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.rows {
            return None;
        }
        let start = row.checked_mul(self.columns)?;
        self.structure.get(start..start.checked_add(self.columns)?)
    }

    pub fn steps(&self, row: usize) -> Option<&[Step]> {
        self.steps.get(row).map(|steps| steps.as_slice())
    }

    pub fn result(&self, row: usize) -> Option<bool> {
        self.results.get(row).copied()
    }
}

fn cell(element: &str, value: bool, cell_type: CellType, row: usize, column: usize) -> Cell {
    Cell {
        element: element.to_string(),
        value,
        cell_type,
        column,
        row,
        position: format!("{}x{}", row, column),
    }
}

/// Value of variable `column` in `row`. The first variable changes slowest
/// and row 0 is all true.
pub fn truth_value(row: usize, column: usize, columns: usize) -> bool {
    let alternating = 1usize << (columns - column - 1);
    !((row / alternating) % 2 == 1)
}

/// Distinct propositions in first-seen order, at every depth.
pub fn discover(nodes: &[Node]) -> Vec<Variable> {
    let mut variables = Vec::<Variable>::new();
    collect(nodes, &mut variables);
    variables
}

fn collect(nodes: &[Node], variables: &mut Vec<Variable>) {
    for node in nodes {
        match node {
            Node::Proposition {
                value, negatived, ..
            } => match variables.iter_mut().find(|v| v.value == *value) {
                Some(existing) => existing.negatived |= *negatived,
                None => variables.push(Variable {
                    value: value.clone(),
                    negatived: *negatived,
                }),
            },
            Node::SubExpression { body, .. } => collect(body, variables),
            Node::Operation { .. } => {}
        }
    }
}

#[derive(Default)]
struct Level {
    pending: Option<OperationKey>,
    operands: Vec<bool>,
    previous: Option<bool>,
    parts: Vec<String>,
    steps: Vec<Step>,
}

impl Level {
    fn flush(&mut self, key: OperationKey) {
        let mut operands = Vec::<bool>::with_capacity(self.operands.len() + 1);
        operands.extend(self.previous);
        operands.append(&mut self.operands);

        let value = key.apply(&operands);
        self.steps.push(Step {
            expression: self.parts.join(" "),
            value,
            operands,
            key,
        });
        self.previous = Some(value);
    }
}

/// Evaluates one level of nodes. Groups are evaluated recursively and their
/// steps come before the steps of the level containing them.
pub fn evaluate(nodes: &[Node], assignment: &HashMap<&str, bool>) -> Evaluation {
    let mut level = Level::default();

    for node in nodes {
        match node {
            Node::Proposition {
                value, negatived, ..
            } => {
                let assigned = assignment.get(value.as_str()).copied().unwrap_or(false);
                level.operands.push(assigned != *negatived);
                level.parts.push(display(value, *negatived));
            }
            Node::SubExpression {
                body, negatived, ..
            } => {
                let inner = evaluate(body, assignment);
                level.operands.push(inner.value != *negatived);
                level.parts.push(display(&format!("({})", inner.text), *negatived));
                level.steps.extend(inner.steps);
            }
            Node::Operation { value, key, .. } => {
                if let Some(pending) = level.pending.filter(|pending| pending != key) {
                    level.flush(pending);
                }
                level.pending = Some(*key);
                level.parts.push(value.clone());
            }
        }
    }

    let value = match level.pending {
        Some(key) => {
            level.flush(key);
            level.previous.unwrap_or(false)
        }
        // A lone operand
        None => level.operands.first().copied().unwrap_or(false),
    };

    Evaluation {
        text: level.parts.join(" "),
        steps: level.steps,
        value,
    }
}

fn display(text: &str, negatived: bool) -> String {
    if negatived {
        format!("{}{}", NEGATION_DISPLAY, text)
    } else {
        text.to_string()
    }
}

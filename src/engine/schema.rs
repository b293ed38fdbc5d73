//! Bundled demo schema.
//!
//! ```graphql
//! type Query {
//!   hello: String
//!   extra: String
//!   rollDice(dice: Int!, sides: Int): [Int]
//! }
//! ```

use async_graphql::{
    Context, EmptyMutation, EmptySubscription, Object, Request, Response, Schema,
    Variables as EngineVariables,
};
use async_trait::async_trait;
use rand::Rng;
use serde_json::Value;

use crate::engine::diagnostics::Diagnostics;
use crate::engine::result::{ErrorLocation, ExecutionError, ExecutionResult};
use crate::engine::ExecutionEngine;
use crate::graphql::OperationRequest;

/// Upper bound on dice per roll.
pub const MAX_DICE: i32 = 1000;
const DEFAULT_SIDES: i32 = 6;

pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// A basic GraphQL object.
    async fn hello(&self) -> Option<String> {
        Some("Hello world!".to_string())
    }

    /// Another basic GraphQL object.
    async fn extra(&self) -> Option<String> {
        Some("Extra!".to_string())
    }

    /// A GraphQL object with arguments.
    async fn roll_dice(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "Number of dice to roll")] dice: i32,
        #[graphql(desc = "Sides per die (default 6)")] sides: Option<i32>,
    ) -> async_graphql::Result<Option<Vec<Option<i32>>>> {
        let sides = sides.unwrap_or(DEFAULT_SIDES);
        if sides < 1 {
            return Err(format!("sides must be at least 1, got {sides}").into());
        }
        if dice > MAX_DICE {
            return Err(format!("cannot roll more than {MAX_DICE} dice").into());
        }

        if let Some(diagnostics) = ctx.data_opt::<Diagnostics>() {
            diagnostics.emit(format_args!("rolling {dice} dice with {sides} sides"));
        }

        let mut rng = rand::thread_rng();
        let rolls = (0..dice.max(0))
            .map(|_| Some(rng.gen_range(1..=sides)))
            .collect();
        Ok(Some(rolls))
    }
}

pub type DemoSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// `ExecutionEngine` backed by the demo schema.
#[derive(Clone)]
pub struct DemoEngine {
    schema: DemoSchema,
}

impl DemoEngine {
    pub fn new() -> Self {
        Self {
            schema: Schema::build(QueryRoot, EmptyMutation, EmptySubscription).finish(),
        }
    }

    /// Schema in SDL form.
    pub fn sdl(&self) -> String {
        self.schema.sdl()
    }
}

impl Default for DemoEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExecutionEngine for DemoEngine {
    async fn execute(&self, request: &OperationRequest, diagnostics: &Diagnostics) -> ExecutionResult {
        let mut engine_request = Request::new(request.query()).data(diagnostics.clone());
        if let Some(variables) = request.variables() {
            engine_request = engine_request.variables(EngineVariables::from_json(Value::Object(
                variables.clone().into_inner(),
            )));
        }
        if let Some(name) = request.operation_name() {
            engine_request = engine_request.operation_name(name);
        }

        into_result(self.schema.execute(engine_request).await)
    }
}

fn into_result(response: Response) -> ExecutionResult {
    let errors = response
        .errors
        .into_iter()
        .map(|error| ExecutionError {
            message: error.message,
            locations: error
                .locations
                .into_iter()
                .map(|pos| ErrorLocation {
                    line: pos.line,
                    column: pos.column,
                })
                .collect(),
        })
        .collect();

    let data = match response.data.into_json() {
        Ok(Value::Null) => None,
        Ok(data) => Some(data),
        Err(e) => {
            tracing::error!(error = %e, "Engine produced data that is not representable as JSON");
            None
        }
    };

    ExecutionResult { data, errors }
}

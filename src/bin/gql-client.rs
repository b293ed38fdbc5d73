use clap::{Parser, ValueEnum};
use reqwest::header::CONTENT_TYPE;
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "gql-client")]
#[command(about = "Send a GraphQL operation to a graphql-http server", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:4004/graphql")]
    url: String,

    /// How the operation is encoded on the wire.
    #[arg(short, long, value_enum, default_value_t = Transport::Json)]
    transport: Transport,

    /// JSON object with variable bindings.
    #[arg(short, long)]
    variables: Option<String>,

    /// Operation to run when the document has several.
    #[arg(short, long)]
    operation_name: Option<String>,

    /// The GraphQL document.
    query: String,
}

#[derive(Clone, Copy, ValueEnum)]
enum Transport {
    /// GET with URL parameters
    Get,
    /// POST application/json
    Json,
    /// POST application/graphql, variables and operation name in the URL
    Graphql,
    /// POST application/x-www-form-urlencoded
    Form,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let mut params: Vec<(&str, &str)> = Vec::new();
    if let Some(variables) = &cli.variables {
        params.push(("variables", variables.as_str()));
    }
    if let Some(name) = &cli.operation_name {
        params.push(("operationName", name.as_str()));
    }

    let request = match cli.transport {
        Transport::Get => {
            params.insert(0, ("query", cli.query.as_str()));
            client.get(&cli.url).query(&params)
        }
        Transport::Json => {
            let mut body = json!({ "query": cli.query });
            if let Some(variables) = &cli.variables {
                body["variables"] = Value::String(variables.clone());
            }
            if let Some(name) = &cli.operation_name {
                body["operationName"] = Value::String(name.clone());
            }
            client.post(&cli.url).json(&body)
        }
        Transport::Graphql => client
            .post(&cli.url)
            .query(&params)
            .header(CONTENT_TYPE, "application/graphql")
            .body(cli.query.clone()),
        Transport::Form => {
            params.insert(0, ("query", cli.query.as_str()));
            client.post(&cli.url).form(&params)
        }
    };

    print_response(request.send().await?).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;
    eprintln!("HTTP {}", status);

    match serde_json::from_str::<Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) if text.is_empty() => {}
        Err(_) => println!("{}", text),
    }
    Ok(())
}

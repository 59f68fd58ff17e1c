use std::{collections::BTreeMap, fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use asnparse::{
    ast::{
        ast::{Ast, NodeId, NodeKind, NodeType},
        visitor::Visitor,
    },
    format_error,
    lexer::lexer::tokenize,
    parser::parser::parse,
};
use clap::Parser;

/// Parses a script and reports timings and a node census.
#[derive(Debug, Parser)]
#[command(name = "asnparse", version)]
struct Args {
    /// The script to parse.
    file: PathBuf,

    /// Require `;` after every statement instead of inserting them.
    #[arg(long)]
    strict_semicolons: bool,

    /// Print every token before parsing.
    #[arg(long)]
    tokens: bool,

    /// Print the tree as an indented outline.
    #[arg(long)]
    tree: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let file_name = args
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.file.display().to_string());

    let source = match read_to_string(&args.file) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", args.file.display(), error);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(source.clone(), Some(file_name)) {
        Ok(tokens) => tokens,
        Err(error) => {
            eprint!("{}", format_error(&error, &source));
            return ExitCode::FAILURE;
        }
    };

    println!("Tokenized in {:?}", start.elapsed());

    if args.tokens {
        for token in &tokens {
            token.debug();
        }
    }

    let parse_start = Instant::now();
    let ast = match parse(tokens, args.strict_semicolons) {
        Ok(ast) => ast,
        Err(error) => {
            eprint!("{}", format_error(&error, &source));
            return ExitCode::FAILURE;
        }
    };

    println!("Parsed in {:?}", parse_start.elapsed());

    if args.tree {
        print!("{}", outline(&ast));
    }

    for (kind, count) in census(&ast) {
        println!("{:>6} {}", count, kind);
    }

    println!("Total time: {:?}", start.elapsed());

    ExitCode::SUCCESS
}

/// Number of nodes of each kind reachable from the root.
fn census(ast: &Ast) -> BTreeMap<String, usize> {
    fn count(ast: &Ast, id: NodeId, visitor: &mut Visitor<BTreeMap<String, usize>>) {
        *visitor.state.entry(ast.kind(id).node_type().to_string()).or_insert(0) += 1;
    }

    let mut visitor = Visitor::new(BTreeMap::new());

    for kind in NodeType::ALL {
        visitor.before(kind, count);
    }

    ast.traverse(ast.root(), &mut visitor);
    visitor.into_state()
}

struct Outline {
    depth: usize,
    out: String,
}

/// One line per node, indented by depth.
fn outline(ast: &Ast) -> String {
    fn enter(ast: &Ast, id: NodeId, visitor: &mut Visitor<Outline>) {
        let label = match ast.kind(id) {
            NodeKind::Name(token)
            | NodeKind::Number(token)
            | NodeKind::String(token)
            | NodeKind::RegEx(token) => format!("{} {}", ast.kind(id).node_type(), token.value),
            NodeKind::BinaryOp(binary) => format!("BinaryOp {}", binary.operator.value),
            NodeKind::UnaryPrefix(unary) | NodeKind::UnaryPostfix(unary) => {
                format!("{} {}", ast.kind(id).node_type(), unary.operator.value)
            }
            kind => kind.node_type().to_string(),
        };

        let indent = "  ".repeat(visitor.state.depth);
        visitor.state.out.push_str(&format!("{}{} {}\n", indent, label, id));
        visitor.state.depth += 1;
    }

    fn leave(_: &Ast, _: NodeId, visitor: &mut Visitor<Outline>) {
        visitor.state.depth -= 1;
    }

    let mut visitor = Visitor::new(Outline {
        depth: 0,
        out: String::new(),
    });

    for kind in NodeType::ALL {
        visitor.before(kind, enter).after(kind, leave);
    }

    ast.traverse(ast.root(), &mut visitor);
    visitor.into_state().out
}

use polyder_compute::evaluate;
use polyder_parser::is_valid_expression;
use std::{
    env,
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    process::ExitCode,
};

/// How invalid lines are reported in the output file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum MessageFormat {
    /// Every invalid line produces the same fixed message.
    ///
    /// This is the default option.
    #[default]
    Plain,

    /// Invalid lines are reported together with their 1-based line number.
    WithLineNumber,
}

impl MessageFormat {
    /// Renders the message written in place of a result for an invalid line.
    fn message(self, line_number: usize) -> String {
        match self {
            MessageFormat::Plain => "Invalid polynomial".to_string(),
            MessageFormat::WithLineNumber => format!("Invalid polynomial at line {}", line_number),
        }
    }
}

/// Differentiates each line of `reader`, writing one result line to `writer` per input line.
///
/// All whitespace is stripped from a line before validation, so `3x^2 + 2x` and `3x^2+2x` are the
/// same expression. Lines that fail validation produce the invalid message in the chosen format
/// and never abort the batch; only I/O failures do.
fn process(reader: impl BufRead, writer: &mut impl Write, format: MessageFormat) -> io::Result<()> {
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let expression = line
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>();

        if !is_valid_expression(&expression) {
            writeln!(writer, "{}", format.message(index + 1))?;
            continue;
        }

        match evaluate(&expression) {
            Ok(result) => writeln!(writer, "{}", result)?,
            // the validator and the pipeline agree on the grammar; this arm keeps a
            // construction-time error on the same message instead of crashing the batch
            Err(_) => writeln!(writer, "{}", format.message(index + 1))?,
        }
    }

    writer.flush()
}

/// Runs the batch over the given file paths.
fn run(input_path: &str, output_path: &str) -> io::Result<()> {
    let reader = BufReader::new(File::open(input_path)?);
    let mut writer = BufWriter::new(File::create(output_path)?);

    process(reader, &mut writer, MessageFormat::default())
}

fn main() -> ExitCode {
    let args = env::args().skip(1).collect::<Vec<_>>();

    let [input_path, output_path] = args.as_slice() else {
        eprintln!("usage: polyder <input-file> <output-file>");
        return ExitCode::FAILURE;
    };

    if let Err(err) = run(input_path, output_path) {
        eprintln!("{}", err);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Runs `process` over the given input text and returns the produced output.
    fn process_str(input: &str, format: MessageFormat) -> String {
        let mut output = Vec::new();
        process(input.as_bytes(), &mut output, format).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn batch_with_plain_messages() {
        let output = process_str("3x^2+2x\nbogus$\nx\n", MessageFormat::Plain);
        assert_eq!(output, "6.0x + 2.0\nInvalid polynomial\n1.0\n");
    }

    #[test]
    fn batch_with_line_numbers() {
        let output = process_str("3x^2+\n2x^3-2x^3+5x\n3x^2+2x+5\n", MessageFormat::WithLineNumber);
        assert_eq!(
            output,
            "Invalid polynomial at line 1\n5.0\nInvalid polynomial at line 3\n",
        );
    }

    #[test]
    fn whitespace_is_stripped_before_validation() {
        assert_eq!(
            process_str("3x^2 + 2x\n", MessageFormat::Plain),
            process_str("3x^2+2x\n", MessageFormat::Plain),
        );
    }

    #[test]
    fn invalid_lines_do_not_stop_the_batch() {
        let output = process_str("+x\n4x^2\n", MessageFormat::Plain);
        assert_eq!(output, "Invalid polynomial\n8.0x\n");
    }
}

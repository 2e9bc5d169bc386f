use encoding_rs::Encoding;

use crate::EncodeError;
use crate::FormValue;
use crate::Output;
use crate::writers::PartWriter;
use crate::writers::ScalarWriter;
use crate::writers::part_writer::framing_length;
use crate::writers::part_writer::write_framed;

/// Writes a non-empty sequence of scalars, delegating each element to
/// the scalar writer. Every element becomes its own framed part, all
/// sharing the same key.
pub struct ManyScalarsWriter {
    scalar_writer: ScalarWriter,
}

impl ManyScalarsWriter {
    pub fn new() -> Self {
        Self {
            scalar_writer: ScalarWriter,
        }
    }
}

impl PartWriter for ManyScalarsWriter {
    fn is_applicable(&self, value: &FormValue) -> bool {
        matches!(value, FormValue::ManyScalars(scalars) if !scalars.is_empty())
    }

    fn write_parts(
        &self,
        output: &Output,
        boundary: &str,
        key: &str,
        value: &FormValue,
    ) -> Result<(), EncodeError> {
        let FormValue::ManyScalars(scalars) = value else {
            return Err(EncodeError::unsupported(key, value.kind()));
        };

        for scalar in scalars {
            write_framed(output, boundary, |output| {
                self.scalar_writer.write_scalar_inner(output, key, scalar)
            })?;
        }

        Ok(())
    }

    fn length(
        &self,
        charset: &'static Encoding,
        boundary: &str,
        key: &str,
        value: &FormValue,
    ) -> usize {
        let FormValue::ManyScalars(scalars) = value else {
            return 0;
        };

        scalars
            .iter()
            .map(|scalar| {
                framing_length(charset, boundary)
                    + self.scalar_writer.scalar_inner_length(charset, key, scalar)
            })
            .sum()
    }
}


#[cfg(test)]
mod test_write_parts {
    use super::*;
    use crate::ScalarValue;
    use encoding_rs::UTF_8;

    #[test]
    fn it_should_write_one_part_per_element_in_order() {
        let output = Output::new(UTF_8);
        let writer = ManyScalarsWriter::new();
        let value: FormValue = [1, 2, 3].into_iter().collect();

        writer.write_parts(&output, "XYZ", "ns", &value).unwrap();

        let text = String::from_utf8(output.bytes().to_vec()).unwrap();
        assert_eq!(text.matches("--XYZ\r\n").count(), 3);
        assert_eq!(text.matches("name=\"ns\"").count(), 3);
        assert!(text.find("\r\n1\r\n").unwrap() < text.find("\r\n2\r\n").unwrap());
    }

    #[test]
    fn it_should_equal_the_concatenation_of_singular_parts() {
        let scalars = vec![ScalarValue::from("x"), ScalarValue::from(true)];

        let composite_output = Output::new(UTF_8);
        ManyScalarsWriter::new()
            .write_parts(
                &composite_output,
                "XYZ",
                "vs",
                &FormValue::ManyScalars(scalars.clone()),
            )
            .unwrap();

        let singular_output = Output::new(UTF_8);
        for scalar in scalars {
            ScalarWriter
                .write_parts(&singular_output, "XYZ", "vs", &FormValue::Scalar(scalar))
                .unwrap();
        }

        assert_eq!(composite_output.bytes(), singular_output.bytes());
    }
}

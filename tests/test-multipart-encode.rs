use multipart_form_body::EncodeError;
use multipart_form_body::FilePart;
use multipart_form_body::FormValue;
use multipart_form_body::MultipartEncoder;
use multipart_form_body::Output;
use multipart_form_body::ScalarValue;
use multipart_form_body::encoding_rs::UTF_8;
use multipart_form_body::writers::PartWriter;
use multipart_form_body::writers::WriterRegistry;

fn encode_utf8(pairs: &[(&str, FormValue)]) -> String {
    let form = MultipartEncoder::new()
        .encode_with_boundary(pairs, "XYZ")
        .unwrap();

    String::from_utf8(form.as_bytes().to_vec()).unwrap()
}

#[test]
fn it_should_encode_a_single_scalar_byte_exact() {
    let body = encode_utf8(&[("n", FormValue::from(42))]);

    assert_eq!(
        body,
        "--XYZ\r\n\
         Content-Disposition: form-data; name=\"n\"\r\n\
         Content-Type: text/plain; charset=UTF-8\r\n\
         \r\n\
         42\r\n\
         --XYZ--\r\n"
    );
}

#[test]
fn it_should_encode_two_scalars_in_order() {
    let body = encode_utf8(&[("a", FormValue::from("x")), ("b", FormValue::from(true))]);

    assert_eq!(
        body,
        "--XYZ\r\n\
         Content-Disposition: form-data; name=\"a\"\r\n\
         Content-Type: text/plain; charset=UTF-8\r\n\
         \r\n\
         x\r\n\
         --XYZ\r\n\
         Content-Disposition: form-data; name=\"b\"\r\n\
         Content-Type: text/plain; charset=UTF-8\r\n\
         \r\n\
         true\r\n\
         --XYZ--\r\n"
    );
}

#[test]
fn it_should_encode_a_single_file_with_guessed_content_type() {
    let file = FilePart::new(b"hi".as_slice()).file_name("hi.txt");
    let body = encode_utf8(&[("f", FormValue::from(file))]);

    assert_eq!(
        body,
        "--XYZ\r\n\
         Content-Disposition: form-data; name=\"f\"; filename=\"hi.txt\"\r\n\
         Content-Type: text/plain\r\n\
         Content-Transfer-Encoding: binary\r\n\
         \r\n\
         hi\r\n\
         --XYZ--\r\n"
    );
}

#[test]
fn it_should_encode_many_files_as_separate_parts() {
    let files = FormValue::ManyFiles(vec![
        FilePart::new(b"one".as_slice()).file_name("a.bin"),
        FilePart::new(b"two".as_slice()).file_name("b.bin"),
    ]);
    let body = encode_utf8(&[("fs", files)]);

    assert_eq!(body.matches("--XYZ\r\n").count(), 2);
    assert_eq!(body.matches("name=\"fs\"").count(), 2);
    assert!(body.find("filename=\"a.bin\"").unwrap() < body.find("filename=\"b.bin\"").unwrap());
    assert!(body.ends_with("--XYZ--\r\n"));
}

#[test]
fn it_should_reject_an_empty_collection() {
    let result =
        MultipartEncoder::new().encode_with_boundary(&[("fs", FormValue::ManyFiles(vec![]))], "XYZ");

    assert!(matches!(
        result,
        Err(EncodeError::UnsupportedValue { key, .. }) if key == "fs"
    ));
}

#[test]
fn it_should_fail_writes_after_close_and_keep_contents() {
    let output = Output::new(UTF_8);
    output.write_str("before").unwrap();

    output.close();
    let result = output.write_str("x");

    assert_eq!(result, Err(EncodeError::ClosedSink));
    assert_eq!(output.bytes().as_ref(), b"before");
}

#[test]
fn it_should_satisfy_the_framing_law() {
    let pairs = [
        ("a", FormValue::from("text")),
        ("b", FormValue::from(FilePart::new(b"bytes".as_slice()))),
        ("c", FormValue::raw_bytes_with_file_name(b"blob".as_slice(), "c.bin")),
        ("d", [1, 2].into_iter().collect::<FormValue>()),
    ];
    let body = encode_utf8(&pairs);

    // Exactly one closing boundary, and it terminates the body.
    assert_eq!(body.matches("--XYZ--\r\n").count(), 1);
    assert!(body.ends_with("--XYZ--\r\n"));

    // Every part's opening boundary is followed by a header block
    // terminated by an empty line.
    let closing_at = body.find("--XYZ--\r\n").unwrap();
    for (at, _) in body.match_indices("--XYZ\r\n") {
        if at >= closing_at {
            continue;
        }
        let part = &body[at + "--XYZ\r\n".len()..];
        let headers_end = part.find("\r\n\r\n").unwrap();
        assert!(part[..headers_end].starts_with("Content-Disposition: form-data; name=\""));
    }
}

#[test]
fn it_should_preserve_every_key_once_per_part() {
    let pairs = [
        ("single", FormValue::from("v")),
        ("many", FormValue::ManyScalars(vec![
            ScalarValue::from(1),
            ScalarValue::from(2),
            ScalarValue::from(3),
        ])),
    ];
    let body = encode_utf8(&pairs);

    assert_eq!(body.matches("name=\"single\"").count(), 1);
    assert_eq!(body.matches("name=\"many\"").count(), 3);
}

#[test]
fn it_should_append_a_pre_encoded_form_verbatim() {
    let sub_form = MultipartEncoder::new()
        .encode_with_boundary(&[("inner", FormValue::from("v"))], "SUB")
        .unwrap();
    let sub_body = String::from_utf8(sub_form.as_bytes().to_vec()).unwrap();

    let body = encode_utf8(&[
        ("before", FormValue::from(1)),
        ("nested", FormValue::PreEncoded(sub_form)),
    ]);

    assert!(body.contains(&sub_body));
    assert!(body.contains("--SUB--\r\n"));
    assert!(body.ends_with("--XYZ--\r\n"));
}

#[test]
fn it_should_never_under_predict_the_body_length() {
    let cases: Vec<Vec<(&str, FormValue)>> = vec![
        vec![("n", FormValue::from(42))],
        vec![("text", FormValue::from("a longer piece of text, with punctuation"))],
        vec![("f", FormValue::from(FilePart::new(vec![9u8; 5_000]).file_name("big.bin")))],
        vec![("blob", FormValue::raw_bytes(vec![0u8; 100]))],
        vec![("ns", (0..50).collect::<FormValue>())],
        vec![
            ("a", FormValue::from("x")),
            ("fs", FormValue::ManyFiles(vec![
                FilePart::new(b"one".as_slice()).file_name("a.txt"),
                FilePart::new(b"two".as_slice()).file_name("b.txt"),
            ])),
        ],
    ];

    let registry = WriterRegistry::new();

    for pairs in cases {
        let mut predicted = 0;
        for (key, value) in &pairs {
            let writer = registry.find(key, value).unwrap();
            predicted += writer.length(UTF_8, "XYZ", key, value);

            let output = Output::new(UTF_8);
            writer.write_parts(&output, "XYZ", key, value).unwrap();
            assert!(
                writer.length(UTF_8, "XYZ", key, value) >= output.position(),
                "writer under-predicted for key {key:?}",
            );
        }

        let form = MultipartEncoder::new()
            .encode_with_boundary(&pairs, "XYZ")
            .unwrap();
        let closing = "--XYZ--\r\n".len();

        assert!(predicted + closing >= form.len());
    }
}

#[test]
fn it_should_expose_boundary_and_content_type_for_the_request() {
    let form = MultipartEncoder::new()
        .encode(&[("n", FormValue::from(1))])
        .unwrap();

    assert_eq!(
        form.content_type(),
        format!("multipart/form-data; boundary={}", form.boundary()),
    );
}

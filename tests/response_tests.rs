use foscam_rs::dto::{DevName, ImageSetting};
use foscam_rs::{boolean_to_number, number_to_boolean, parse_response, CommandResponse};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

const IMAGE_SETTING: &str = r#"<CGI_Result>
    <result>0</result>
    <brightness>50</brightness>
    <contrast>48</contrast>
    <hue>50</hue>
    <saturation>52</saturation>
    <sharpness>50</sharpness>
    <denoiseLevel>0</denoiseLevel>
</CGI_Result>"#;

#[test]
fn test_image_setting_response() {
    let value = parse_response(Some(IMAGE_SETTING));
    assert_eq!(
        value,
        json!({
            "result": 0,
            "brightness": 50,
            "contrast": 48,
            "hue": 50,
            "saturation": 52,
            "sharpness": 50,
            "denoiseLevel": 0
        })
    );

    let setting: ImageSetting = CommandResponse::new(value).parse_as().unwrap();
    assert_eq!(setting.brightness, 50);
    assert_eq!(setting.contrast, 48);
}

#[test]
fn test_numbers_and_text() {
    let value = parse_response(Some(
        "<CGI_Result><result>0</result><ratio>2.5</ratio><mac>00626E4FA1B2</mac>\
         <offset>-3</offset><ver>1.11.1.8</ver></CGI_Result>",
    ));
    assert_eq!(
        value,
        json!({
            "result": 0,
            "ratio": 2.5,
            "mac": "00626E4FA1B2",
            "offset": -3,
            "ver": "1.11.1.8"
        })
    );
}

#[test]
fn test_nested_elements() {
    let value = parse_response(Some(
        "<CGI_Result><result>0</result><list><item0>a</item0><item1>b</item1></list></CGI_Result>",
    ));
    assert_eq!(
        value,
        json!({"result": 0, "list": {"item0": "a", "item1": "b"}})
    );
}

#[test]
fn test_repeated_tags_keep_last() {
    let value = parse_response(Some(
        "<CGI_Result><result>0</result><name>a</name><name>b</name></CGI_Result>",
    ));
    assert_eq!(value, json!({"result": 0, "name": "b"}));
}

#[test]
fn test_html_snapshot_page_is_text() {
    let body = "<html><body><img src=\"../snapPic/Snap_20240101.jpg\"></body>";
    assert_eq!(parse_response(Some(body)), json!(body));
}

#[test]
fn test_dev_name_loses_leading_zeros() {
    let response =
        CommandResponse::from_xml("<CGI_Result><result>0</result><devName>007</devName></CGI_Result>");
    let name: DevName = response.parse_as().unwrap();
    assert_eq!(name.dev_name, "7");
}

#[test]
fn test_parse_as_shape_mismatch() {
    let response = CommandResponse::from_xml("<CGI_Result><result>0</result></CGI_Result>");
    let result: foscam_rs::Result<ImageSetting> = response.parse_as();
    assert!(matches!(
        result,
        Err(foscam_rs::Error::UnexpectedResponse(_))
    ));
}

#[test]
fn test_coercion_helpers() {
    let mut record = json!({"isEnable": 1, "isAudio": 0, "mode": 2});
    number_to_boolean(&mut record, "isEnable");
    number_to_boolean(&mut record, "isAudio");
    number_to_boolean(&mut record, "mode");
    number_to_boolean(&mut record, "missing");
    assert_eq!(record, json!({"isEnable": true, "isAudio": false, "mode": 2}));

    assert_eq!(boolean_to_number(json!(true), None), json!(1));
    assert_eq!(boolean_to_number(json!(false), None), json!(0));
    assert_eq!(boolean_to_number(Value::Null, Some(json!(0))), json!(0));
    assert_eq!(boolean_to_number(Value::Null, None), Value::Null);
    assert_eq!(boolean_to_number(json!("x"), None), json!("x"));
}

//! Parsing of ELB Query API response documents.
//!
//! ```text
//! <DescribeInstanceHealthResponse>
//!   <DescribeInstanceHealthResult>
//!     <InstanceStates>
//!       <member><InstanceId/><State/><ReasonCode/><Description/></member>
//!     </InstanceStates>
//!   </DescribeInstanceHealthResult>
//! </DescribeInstanceHealthResponse>
//!
//! <ErrorResponse><Error><Code/><Message/></Error></ErrorResponse>
//! ```

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::aws::types::{HealthQueryError, HealthQueryResult};
use crate::health::report::{HealthReport, MemberHealthRecord};

/// A decoded API response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElbResponse {
    InstanceHealth(HealthReport),
    Error { code: String, message: String },
}

#[derive(Default)]
struct MemberBuilder {
    instance_id: String,
    state: String,
    reason_code: String,
    description: String,
}

impl MemberBuilder {
    fn field(&mut self, element: &str) -> Option<&mut String> {
        match element {
            "InstanceId" => Some(&mut self.instance_id),
            "State" => Some(&mut self.state),
            "ReasonCode" => Some(&mut self.reason_code),
            "Description" => Some(&mut self.description),
            _ => None,
        }
    }

    fn build(self) -> HealthQueryResult<MemberHealthRecord> {
        if self.instance_id.is_empty() || self.state.is_empty() {
            return Err(HealthQueryError::Parse(
                "instance state without InstanceId or State".to_string(),
            ));
        }
        let optional = |s: String| if s.is_empty() { None } else { Some(s) };
        Ok(MemberHealthRecord {
            member_id: self.instance_id,
            state: self.state,
            reason_code: optional(self.reason_code),
            description: optional(self.description),
        })
    }
}

/// Decode a `DescribeInstanceHealth` or `ErrorResponse` document.
pub fn parse_response(xml: &str) -> HealthQueryResult<ElbResponse> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut path: Vec<String> = Vec::new();
    let mut root: Option<String> = None;
    let mut report = HealthReport::new();
    let mut member: Option<MemberBuilder> = None;
    let mut error_code = String::new();
    let mut error_message = String::new();

    loop {
        let event = reader
            .read_event()
            .map_err(|e| HealthQueryError::Parse(e.to_string()))?;

        match event {
            Event::Start(e) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                if root.is_none() {
                    root = Some(name.clone());
                }
                if name == "member" && path.last().map(String::as_str) == Some("InstanceStates") {
                    member = Some(MemberBuilder::default());
                }
                path.push(name);
            }
            Event::End(e) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                if name == "member" && path.len() >= 2 && path[path.len() - 2] == "InstanceStates" {
                    if let Some(builder) = member.take() {
                        report.push(builder.build()?);
                    }
                }
                path.pop();
            }
            Event::Text(e) => {
                let text = e
                    .unescape()
                    .map_err(|e| HealthQueryError::Parse(e.to_string()))?;
                append_text(&path, &mut member, &mut error_code, &mut error_message, &text);
            }
            Event::CData(e) => {
                let text = String::from_utf8_lossy(&e.into_inner()).into_owned();
                append_text(&path, &mut member, &mut error_code, &mut error_message, &text);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    match root.as_deref() {
        Some("DescribeInstanceHealthResponse") => Ok(ElbResponse::InstanceHealth(report)),
        Some("ErrorResponse") | Some("Response") if !error_code.is_empty() => Ok(ElbResponse::Error {
            code: error_code,
            message: error_message,
        }),
        Some(other) => Err(HealthQueryError::Parse(format!(
            "unexpected document element '{}'",
            other
        ))),
        None => Err(HealthQueryError::Parse("empty response body".to_string())),
    }
}

fn append_text(
    path: &[String],
    member: &mut Option<MemberBuilder>,
    error_code: &mut String,
    error_message: &mut String,
    text: &str,
) {
    let Some(element) = path.last().map(String::as_str) else {
        return;
    };
    if let Some(builder) = member.as_mut() {
        if let Some(field) = builder.field(element) {
            field.push_str(text);
        }
        return;
    }
    let in_error = path.len() >= 2 && path[path.len() - 2] == "Error";
    match element {
        "Code" if in_error => error_code.push_str(text),
        "Message" if in_error => error_message.push_str(text),
        _ => {}
    }
}

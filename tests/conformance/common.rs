use std::path::PathBuf;
use vast_check::Diagnostic;

pub fn conformance_dir() -> PathBuf {
    std::env::var("VAST_CHECK_CONFORMANCE_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/conformance"))
}

/// Rule names of `diagnostics`, in order.
pub fn rules(diagnostics: &[Diagnostic]) -> Vec<&str> {
    diagnostics.iter().map(|d| d.rule.as_str()).collect()
}

/// A single-ad inline document that passes the strict profile with no findings.
///
/// Each field is spliced into the markup verbatim, so tests can break one
/// thing at a time.
#[derive(Clone, Debug)]
pub struct Fixture {
    pub version: String,
    pub duration: String,
    /// Extra attributes on the MediaFile, with a leading space.
    pub media_attrs: String,
    /// Extra children of Linear, placed after Duration.
    pub linear_extra: String,
    /// Replaces the whole Creatives body when set.
    pub creatives: Option<String>,
}

impl Default for Fixture {
    fn default() -> Self {
        Fixture {
            version: "3.0".into(),
            duration: "00:00:15".into(),
            media_attrs: String::new(),
            linear_extra: String::new(),
            creatives: None,
        }
    }
}

impl Fixture {
    pub fn version(mut self, version: &str) -> Self {
        self.version = version.into();
        self
    }

    pub fn duration(mut self, duration: &str) -> Self {
        self.duration = duration.into();
        self
    }

    pub fn media_attrs(mut self, attrs: &str) -> Self {
        self.media_attrs = attrs.into();
        self
    }

    pub fn linear_extra(mut self, markup: &str) -> Self {
        self.linear_extra = markup.into();
        self
    }

    pub fn creatives(mut self, markup: &str) -> Self {
        self.creatives = Some(markup.into());
        self
    }

    pub fn render(&self) -> String {
        let creatives = match &self.creatives {
            Some(body) => body.clone(),
            None => format!(
                r#"
        <Creative id="c1">
          <Linear>
            <Duration>{duration}</Duration>{linear_extra}
            <MediaFiles>
              <MediaFile id="m1" delivery="progressive" type="video/mp4" width="854" height="480"{media_attrs}>
                <![CDATA[https://cdn.example.com/spot.mp4]]>
              </MediaFile>
            </MediaFiles>
          </Linear>
        </Creative>
      "#,
                duration = self.duration,
                linear_extra = self.linear_extra,
                media_attrs = self.media_attrs,
            ),
        };
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<VAST version="{version}" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <Ad id="a1">
    <InLine>
      <AdSystem version="1.0">Acme Ads</AdSystem>
      <AdTitle>Spring Spot</AdTitle>
      <Impression id="imp1"><![CDATA[https://track.example.com/imp?c=1&s=2]]></Impression>
      <Creatives>{creatives}</Creatives>
    </InLine>
  </Ad>
</VAST>
"#,
            version = self.version,
            creatives = creatives,
        )
    }
}

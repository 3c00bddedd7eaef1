pub static ERROR_PAGE: &str = r#"{{#*inline "page"}}
<section class="error">
  <h2>No dog this time</h2>
  <p>{{error_message}}</p>
  {{#if show_retry}}
  <form method="get" action="/"><button type="submit">Another dog</button></form>
  {{/if}}
</section>
{{/inline}}
{{~> BASE_LAYOUT~}}
"#;

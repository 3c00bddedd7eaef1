pub static HOME_PAGE: &str = r#"{{#*inline "page"}}
<section class="profile">
  <h2>{{record.breed}}</h2>
  <figure>
    <img src="{{image_src}}" alt="{{record.breed}}">
    <figcaption>{{record.breed}}</figcaption>
  </figure>
  <details>
    <summary>See Description</summary>
    <p>{{record.description}}</p>
  </details>
  <ul class="attributes">
    <li><strong>Group:</strong> {{record.group}}</li>
    <li><strong>Temperament:</strong> {{record.temperament}}</li>
    <li><strong>Trainability:</strong> {{record.trainability_category}}</li>
    <li><strong>Demeanor:</strong> {{record.demeanor_category}}</li>
    <li><strong>Energy Level:</strong> {{record.energy_level_category}}</li>
    <li><strong>Shedding:</strong> {{record.shedding_category}}</li>
    <li><strong>Grooming Frequency:</strong> {{record.grooming_frequency_category}}</li>
    <li><strong>Average Expectancy:</strong> {{average_expectancy}} years</li>
    <li><strong>Average Height:</strong> {{average_height}} cm</li>
    <li><strong>Average Weight:</strong> {{average_weight}} kg</li>
  </ul>
  <form method="get" action="/"><button type="submit">Another dog</button></form>
</section>
<section class="comparison">
  <h2>Comparison with other breeds</h2>
  <div class="charts">
    {{#each charts}}
    <figure class="chart">
      <figcaption>{{title}}{{#if unit}} ({{unit}}){{/if}}</figcaption>
      <div class="bars">
        {{#each bars}}
        <div class="bar{{#if is_current}} current{{/if}}" title="{{label}}: {{count}}">
          {{#if marker}}<span class="marker">{{marker}}</span>{{/if}}
          <span class="fill" style="height: {{percent}}%"></span>
          <span class="label">{{label}}</span>
        </div>
        {{/each}}
      </div>
    </figure>
    {{/each}}
  </div>
</section>
{{/inline}}
{{~> BASE_LAYOUT~}}
"#;
